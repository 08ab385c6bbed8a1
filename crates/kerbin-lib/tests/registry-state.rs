use kerbin_test_utils::PackageBuilder;

#[test]
fn registry_snapshot_round_trip() {
	use kerbin::Registry;
	use kerbin::compatibility::StrictGameComparator;
	use kerbin::package::*;

	kerbin_test_utils::init_logging();

	let mut registry = kerbin_test_utils::sample_registry();
	let mechjeb = registry
		.latest_available("MechJeb2", &[], &StrictGameComparator)
		.expect("identifier should be known.")
		.expect("package should be compatible.")
		.clone();
	registry.register_installed(mechjeb, false);
	assert_eq!(
		registry.register_dll("GameData/ModuleManager.4.2.1.dll"),
		Some("ModuleManager".to_string())
	);

	let dir = kerbin_test_utils::tempfile::tempdir().expect("failed to create temp dir.");
	let path = dir.path().join("registry.bin");
	registry.save_to_file(&path).expect("failed to save registry.");

	let restored = Registry::load_from_file(&path).expect("failed to load registry.");
	assert_eq!(
		restored
			.latest_available("MechJeb2", &[], &StrictGameComparator)
			.expect("identifier should be known.")
			.map(|package| package.version.clone()),
		Some(PackageVersion::new("2.14.3"))
	);
	assert!(restored.is_installed("MechJeb2"));
	assert_eq!(restored.installed_packages().len(), 1);
	assert!(restored.has_dll("ModuleManager"));
}

#[test]
fn snapshot_refused_mid_transaction() {
	use kerbin::registry::TransactionMode;

	kerbin_test_utils::init_logging();

	let mut registry = kerbin_test_utils::sample_registry();
	let dir = kerbin_test_utils::tempfile::tempdir().expect("failed to create temp dir.");
	let path = dir.path().join("registry.bin");

	let transaction = registry
		.begin_transaction(TransactionMode::RequireNew)
		.expect("failed to begin transaction.");
	match transaction.save_to_file(&path) {
		Err(kerbin::Error::Transaction(_)) => {}
		other => panic!("expected a refused snapshot, got {:?}", other),
	}
	drop(transaction);

	registry.save_to_file(&path).expect("saving should work outside a transaction.");
}

#[test]
fn transaction_rolls_back_catalog_edits() {
	use kerbin::compatibility::StrictGameComparator;
	use kerbin::registry::TransactionMode;

	kerbin_test_utils::init_logging();

	let mut registry = kerbin_test_utils::sample_registry();

	/* Dropping the handle throws the edits away. */
	let mut transaction = registry
		.begin_transaction(TransactionMode::RequireNew)
		.expect("failed to begin transaction.");
	transaction.clear_available();
	transaction.add_available(PackageBuilder::new("Scatterer", "0.0838").build());
	assert!(transaction.latest_available("Scatterer", &[], &StrictGameComparator).is_ok());
	assert!(transaction.latest_available("ModuleManager", &[], &StrictGameComparator).is_err());
	drop(transaction);

	assert!(registry.latest_available("ModuleManager", &[], &StrictGameComparator).is_ok());
	assert!(registry.latest_available("Scatterer", &[], &StrictGameComparator).is_err());

	/* Committing keeps them. */
	let mut transaction = registry
		.begin_transaction(TransactionMode::RequireNew)
		.expect("failed to begin transaction.");
	transaction.add_available(PackageBuilder::new("Scatterer", "0.0838").build());
	transaction.commit();

	assert!(registry.latest_available("Scatterer", &[], &StrictGameComparator).is_ok());
	assert!(registry.latest_available("ModuleManager", &[], &StrictGameComparator).is_ok());
}

#[test]
fn catalog_documents_import() {
	use kerbin::Registry;
	use kerbin::compatibility::StrictGameComparator;
	use kerbin::package::*;
	use serde_json::json;

	kerbin_test_utils::init_logging();

	let documents = vec![
		json!({
			"spec_version": "v1.4",
			"identifier": "AwesomeMod",
			"name": "Awesome Mod",
			"abstract": "Does awesome things.",
			"author": "alice",
			"license": "MIT",
			"version": "1.0.0",
			"download": "https://example.com/awesome.zip",
			"ksp_version": "1.12"
		}),
		json!({
			"spec_version": "v1.4",
			"identifier": "AwesomeModContinued",
			"name": "Awesome Mod Continued",
			"abstract": "Keeps doing awesome things.",
			"author": ["alice", "bob"],
			"license": ["MIT", "CC-BY-NC-SA-4.0"],
			"version": "2:1.1.0",
			"download": "https://example.com/awesome-continued.zip",
			"depends": [ { "name": "ModuleManager" } ]
		}),
		json!({ "identifier": "Truncated" }),
	];

	let mut registry = Registry::new();
	assert_eq!(registry.add_catalog_documents(documents), 2);

	let awesome = registry
		.latest_available("AwesomeMod", &[], &StrictGameComparator)
		.expect("identifier should be known.")
		.expect("package should be compatible.");
	assert_eq!(awesome.version, PackageVersion::new("1.0.0"));
	assert_eq!(awesome.game_versions, GameVersionBounds::Explicit(GameVersion::new("1.12").expect("failed to parse version.")));

	let continued = registry
		.latest_available("AwesomeModContinued", &[], &StrictGameComparator)
		.expect("identifier should be known.")
		.expect("package should be compatible.");
	assert_eq!(continued.version, PackageVersion::new("2:1.1.0"));
	assert_eq!(continued.authors, ["alice", "bob"]);
	assert_eq!(continued.depends, [PackageDescriptor::any_version("ModuleManager")]);

	assert!(registry.latest_available("Truncated", &[], &StrictGameComparator).is_err());
}

#[test]
fn gras_comparator_widens_compatibility() {
	use kerbin::Registry;
	use kerbin::compatibility::{GrasGameComparator, StrictGameComparator};
	use kerbin::package::*;

	kerbin_test_utils::init_logging();

	let mut registry = Registry::new();
	registry.add_available(
		PackageBuilder::new("KerbalJointReinforcement", "3.1.4")
			.game_versions(GameVersionBounds::Explicit(
				GameVersion::new("1.0.3").expect("failed to parse version."),
			))
			.build(),
	);
	let criteria = [GameVersion::new("1.0.4").expect("failed to parse version.")];

	/* Declared for 1.0.3, running the 1.0.4 hotfix. */
	assert!(
		registry
			.latest_available("KerbalJointReinforcement", &criteria, &StrictGameComparator)
			.expect("identifier should be known.")
			.is_none()
	);
	assert!(
		registry
			.latest_available("KerbalJointReinforcement", &criteria, &GrasGameComparator::default())
			.expect("identifier should be known.")
			.is_some()
	);

	let compatible = registry.compatible_packages(&criteria, &GrasGameComparator::default());
	assert!(compatible.iter().any(|package| package.identifier == "KerbalJointReinforcement"));
	let incompatible = registry.incompatible_packages(&criteria, &StrictGameComparator);
	assert!(incompatible.iter().any(|package| package.identifier == "KerbalJointReinforcement"));
}
