use super::*;
use crate::store::{ContainerStore, MemoryStore};

fn store_with_children(names: &[&str]) -> MemoryStore {
    let mut store = MemoryStore::new();
    let root = store.root();
    for name in names {
        store.create_group(root, name).unwrap();
    }
    store
}

#[test]
fn test_group_path_conversions() {
    assert!(GroupPath::root().is_root());
    assert_eq!(GroupPath::from("site").segments(), &["site".to_string()]);
    assert_eq!(
        GroupPath::from(vec!["a", "b"]),
        GroupPath::new(["a".to_string(), "b".to_string()])
    );
    assert_eq!(GroupPath::parse("/a//b/"), GroupPath::from(["a", "b"]));
    assert_eq!(GroupPath::from(None::<&str>), GroupPath::root());
    assert_eq!(GroupPath::from(["a", "b"]).to_string(), "/a/b");
}

#[test]
fn test_resolve_or_create_is_idempotent() {
    let mut store = MemoryStore::new();
    let path = GroupPath::from(["site", "roof", "east"]);

    let first = resolve_or_create(&mut store, &path).unwrap();
    let second = resolve_or_create(&mut store, &path).unwrap();
    assert_eq!(first, second);

    let root = store.root();
    assert_eq!(store.child_names(root).unwrap(), vec!["site"]);
    assert_eq!(resolve(&store, &path).unwrap(), first);
}

#[test]
fn test_resolve_or_create_reuses_prefix() {
    let mut store = MemoryStore::new();
    let roof = resolve_or_create(&mut store, &GroupPath::from(["site", "roof"])).unwrap();
    let mast = resolve_or_create(&mut store, &GroupPath::from(["site", "mast"])).unwrap();
    assert_ne!(roof, mast);

    let site = resolve(&store, &GroupPath::from("site")).unwrap();
    assert_eq!(store.child_names(site).unwrap(), vec!["roof", "mast"]);
}

#[test]
fn test_resolve_missing_segment() {
    let mut store = MemoryStore::new();
    resolve_or_create(&mut store, &GroupPath::from("site")).unwrap();

    match resolve(&store, &GroupPath::from(["site", "roof"])) {
        Err(PathError::GroupNotFound { segment, path }) => {
            assert_eq!(segment, "roof");
            assert_eq!(path, "/site/roof");
        }
        other => panic!("expected GroupNotFound, got {:?}", other),
    }
}

#[test]
fn test_table_is_not_a_group() {
    let mut store = MemoryStore::new();
    let root = store.root();
    store
        .create_table(root, "Dataset_0", &["Channel_0".to_string()], 1)
        .unwrap();
    assert!(matches!(
        resolve_or_create(&mut store, &GroupPath::from("Dataset_0")),
        Err(PathError::NotAGroup { .. })
    ));
}

#[test]
fn test_next_auto_name() {
    let store = store_with_children(&[]);
    assert_eq!(next_auto_name(&store, store.root()).unwrap(), "Dataset_0");

    let store = store_with_children(&["Dataset_0", "Dataset_5", "Dataset_abc"]);
    assert_eq!(next_auto_name(&store, store.root()).unwrap(), "Dataset_6");

    let store = store_with_children(&["Dataset_", "Dataset_-3", "Dataset_+4", "Other_9"]);
    assert_eq!(next_auto_name(&store, store.root()).unwrap(), "Dataset_0");
}

#[test]
fn test_next_auto_name_exhausted() {
    let store = store_with_children(&["Dataset_3", "Dataset_18446744073709551615"]);
    assert!(matches!(
        next_auto_name(&store, store.root()),
        Err(PathError::AutoNameExhausted)
    ));
    assert!(matches!(
        assign_dataset_name(&store, store.root(), None),
        Err(PathError::AutoNameExhausted)
    ));

    // Suffixes beyond u64 are not auto names
    let store = store_with_children(&["Dataset_7", "Dataset_18446744073709551616"]);
    assert_eq!(next_auto_name(&store, store.root()).unwrap(), "Dataset_8");
}

#[test]
fn test_assign_dataset_name() {
    let store = store_with_children(&["Capture", "Dataset_1"]);
    let root = store.root();

    assert!(matches!(
        assign_dataset_name(&store, root, Some("Capture")),
        Err(PathError::DuplicateName(name)) if name == "Capture"
    ));
    assert_eq!(assign_dataset_name(&store, root, Some("New")).unwrap(), "New");
    assert_eq!(assign_dataset_name(&store, root, None).unwrap(), "Dataset_2");
}

#[test]
fn test_channel_names() {
    assert_eq!(
        channel_names(&ChannelSuffixes::Index, 3).unwrap(),
        vec!["Channel_0", "Channel_1", "Channel_2"]
    );
    assert_eq!(
        channel_names(&ChannelSuffixes::from(["A", "B"]), 2).unwrap(),
        vec!["Channel_A", "Channel_B"]
    );
    assert_eq!(
        channel_names(&ChannelSuffixes::from("XXXX"), 1).unwrap(),
        vec!["Channel_XXXX"]
    );
}

#[test]
fn test_channel_suffix_count_mismatch() {
    assert!(matches!(
        channel_names(&ChannelSuffixes::from(vec![0, 1, 2]), 2),
        Err(PathError::ChannelCountMismatch {
            channels: 2,
            suffixes: 3
        })
    ));
    assert!(matches!(
        channel_names(&ChannelSuffixes::from("only"), 2),
        Err(PathError::ChannelCountMismatch { .. })
    ));
}

#[test]
fn test_duplicate_channel_names() {
    assert!(matches!(
        channel_names(&ChannelSuffixes::from(vec!["1", "1"]), 2),
        Err(PathError::DuplicateChannel(name)) if name == "Channel_1"
    ));
}
