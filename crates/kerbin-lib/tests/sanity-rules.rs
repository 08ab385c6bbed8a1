use kerbin_test_utils::PackageBuilder;

#[test]
fn sanity_rules() {
	use kerbin::Registry;

	kerbin_test_utils::init_logging();

	let mut registry = Registry::new();
	assert!(registry.check_sanity().is_ok(), "an empty install is fine");

	/* RasterPropMonitor is useless without its core library. */
	registry.register_installed(
		PackageBuilder::new("RasterPropMonitor", "0.31.10")
			.depends("RasterPropMonitor-Core")
			.build(),
		false,
	);
	match registry.check_sanity() {
		Err(kerbin::Error::Inconsistent(errors)) => {
			assert_eq!(
				errors,
				["RasterPropMonitor requires RasterPropMonitor-Core, but nothing provides it."]
			);
		}
		other => panic!("expected an inconsistency, got {:?}", other),
	}

	/* A manually dropped in DLL counts as providing its name. */
	assert_eq!(
		registry.register_dll("GameData/JSI/RasterPropMonitor/Plugins/RasterPropMonitor-Core.dll"),
		Some("RasterPropMonitor-Core".to_string())
	);
	assert!(registry.check_sanity().is_ok());

	/* Until it goes away again. */
	registry.clear_dlls();
	assert!(registry.check_sanity().is_err());
}

#[test]
fn conflicting_installs_are_reported_both_ways() {
	use kerbin::Registry;

	kerbin_test_utils::init_logging();

	let mut registry = Registry::new();
	registry.register_installed(
		PackageBuilder::new("CustomBiomes", "1.6.8")
			.depends("CustomBiomesData")
			.build(),
		false,
	);
	registry.register_installed(
		PackageBuilder::new("CustomBiomesKerbal", "1.6.8")
			.depends("CustomBiomes")
			.provides("CustomBiomesData")
			.conflicts("CustomBiomesData")
			.build(),
		true,
	);
	assert!(registry.check_sanity().is_ok(), "one data pack keeps everyone happy");

	registry.register_installed(
		PackageBuilder::new("CustomBiomesRSS", "1.6.8")
			.depends("CustomBiomes")
			.provides("CustomBiomesData")
			.conflicts("CustomBiomesData")
			.build(),
		true,
	);
	match registry.check_sanity() {
		Err(kerbin::Error::Inconsistent(errors)) => {
			assert!(errors.iter().any(|e| e.contains("CustomBiomesKerbal conflicts with CustomBiomesRSS")));
			assert!(errors.iter().any(|e| e.contains("CustomBiomesRSS conflicts with CustomBiomesKerbal")));
		}
		other => panic!("expected an inconsistency, got {:?}", other),
	}
}

#[test]
fn removal_planning_follows_reverse_dependencies() {
	use std::collections::HashSet;

	use kerbin::Registry;

	kerbin_test_utils::init_logging();

	let mut registry = Registry::new();
	registry.register_installed(
		PackageBuilder::new("CustomBiomes", "1.6.8")
			.depends("CustomBiomesData")
			.build(),
		false,
	);
	registry.register_installed(
		PackageBuilder::new("CustomBiomesKerbal", "1.6.8")
			.depends("CustomBiomes")
			.provides("CustomBiomesData")
			.conflicts("CustomBiomesData")
			.build(),
		true,
	);
	registry.register_installed(PackageBuilder::new("ScanSat", "20.4").build(), false);

	/* Removing the data pack breaks CustomBiomes, so it goes too. */
	let to_remove: HashSet<String> = ["CustomBiomesKerbal".to_string()].into();
	let removal = registry.find_reverse_dependencies(&to_remove);
	let expected: HashSet<String> = ["CustomBiomesKerbal".to_string(), "CustomBiomes".to_string()].into();
	assert_eq!(removal, expected);
	assert!(!removal.contains("ScanSat"));

	/* Bystanders only take themselves along. */
	let to_remove: HashSet<String> = ["ScanSat".to_string()].into();
	assert_eq!(registry.find_reverse_dependencies(&to_remove), to_remove);
}
