//! Property tests for sync planning and document round-trips.

use proptest::prelude::*;

use std::collections::HashSet;

use groupsync::project::{Group, Target};
use groupsync::{plan_sync, Project, SyncPlan};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}\\.(swift|m|txt)").unwrap()
}

/// Unique file names in sorted order, the shape a directory listing has.
fn name_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set(file_name(), 0..12).prop_map(|set| {
        let mut names: Vec<String> = set.into_iter().collect();
        names.sort();
        names
    })
}

/// File names with duplicates allowed.
fn name_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(file_name(), 0..16)
}

fn project_with_group(names: &[String]) -> Project {
    let group = names
        .iter()
        .fold(Group::new("Sources"), |group, name| group.with_file(name.clone()));
    Project::new("Demo")
        .with_target(Target::new("App"))
        .with_group(group)
}

fn group_names(project: &Project) -> Vec<String> {
    project
        .group("Sources")
        .unwrap()
        .files()
        .map(|file| file.path.clone())
        .collect()
}

fn apply_plan(project: &mut Project, plan: &SyncPlan) {
    for name in &plan.to_add {
        let id = project.add_file("Sources", name).unwrap();
        project.attach_to_sources_phase(0, id);
    }
    for name in &plan.to_remove {
        project.remove_file_by_basename(name);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Applying a plan makes the group mirror the directory.
    #[test]
    fn property_applying_a_plan_reaches_the_directory_listing(
        in_group in name_set(),
        on_disk in name_set(),
    ) {
        let mut project = project_with_group(&in_group);
        let plan = plan_sync(&group_names(&project), &on_disk);

        apply_plan(&mut project, &plan);

        let mut result = group_names(&project);
        result.sort();
        prop_assert_eq!(result, on_disk);

        // Every addition was wrapped into the sources phase.
        let phase = project.targets[0].sources_phase().unwrap();
        prop_assert_eq!(phase.files.len(), plan.to_add.len());
    }

    /// PROPERTY: A second plan over the reconciled group is empty.
    #[test]
    fn property_reconciling_twice_changes_nothing(
        in_group in name_set(),
        on_disk in name_set(),
    ) {
        let mut project = project_with_group(&in_group);
        let plan = plan_sync(&group_names(&project), &on_disk);
        apply_plan(&mut project, &plan);

        let second = plan_sync(&group_names(&project), &on_disk);
        prop_assert!(second.is_empty(), "second plan was {:?}", second);
    }

    /// PROPERTY: A plan partitions the names. Additions come from disk only,
    /// removals from the group only, and the two sides never overlap, even
    /// when the inputs carry duplicates.
    #[test]
    fn property_plans_partition_the_names(
        in_group in name_list(),
        on_disk in name_list(),
    ) {
        let plan = plan_sync(&in_group, &on_disk);

        for name in &plan.to_add {
            prop_assert!(on_disk.contains(name));
            prop_assert!(!in_group.contains(name));
            prop_assert!(!plan.to_remove.contains(name));
        }
        for name in &plan.to_remove {
            prop_assert!(in_group.contains(name));
            prop_assert!(!on_disk.contains(name));
        }

        // Duplicated input names plan a single change.
        let added: HashSet<&String> = plan.to_add.iter().collect();
        prop_assert_eq!(added.len(), plan.to_add.len());
        let removed: HashSet<&String> = plan.to_remove.iter().collect();
        prop_assert_eq!(removed.len(), plan.to_remove.len());
    }

    /// PROPERTY: Saving a document and opening it back preserves the graph.
    #[test]
    fn property_save_then_open_round_trips(
        names in name_set(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("project.json");

        let project = project_with_group(&names);
        project.save_to(&document).unwrap();
        let reopened = Project::open(&document).unwrap();

        prop_assert_eq!(
            serde_json::to_value(&reopened).unwrap(),
            serde_json::to_value(&project).unwrap()
        );
    }
}
