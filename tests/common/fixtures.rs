//! Test fixtures: project document builders and raw document constants.

use groupsync::project::{Group, Target};
use groupsync::Project;

/// Build an in-memory project with one target and one group of files.
pub fn sample_project(target: &str, group: &str, names: &[&str]) -> Project {
    let group = names
        .iter()
        .fold(Group::new(group), |group, name| group.with_file(*name));

    Project::new("Demo")
        .with_target(Target::new(target))
        .with_group(group)
}

/// A project document as another tool would write it, pinning the wire
/// format: tagged group children, lowercase phase kinds, uuid ids.
pub const SAMPLE_PROJECT_JSON: &str = r#"{
  "name": "Demo",
  "targets": [
    {
      "name": "App",
      "build_phases": [
        {
          "kind": "sources",
          "files": [
            { "file_ref": "5d7f3f5a-9f9f-4b1e-8f2e-0c1d2e3f4a5b" }
          ]
        },
        {
          "kind": "resources",
          "files": []
        }
      ]
    }
  ],
  "root_group": {
    "name": "",
    "children": [
      {
        "type": "group",
        "name": "Sources",
        "children": [
          {
            "type": "file",
            "id": "5d7f3f5a-9f9f-4b1e-8f2e-0c1d2e3f4a5b",
            "path": "a.swift",
            "source_tree": "<group>"
          }
        ]
      }
    ]
  }
}
"#;
