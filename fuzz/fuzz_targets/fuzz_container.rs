#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use sm2117::dataset::read_from_store;
use sm2117::path::GroupPath;
use sm2117::store::{read_container, ContainerStore, Node};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either load or fail with an error, never panic
    let Ok(store) = read_container(Cursor::new(data)) else {
        return;
    };

    // Anything that loaded must also be readable as datasets
    if let Ok(children) = store.children(store.root()) {
        for (name, node) in children {
            if let Node::Table(_) = node {
                let _ = read_from_store(&store, &name, &GroupPath::root());
            }
        }
    }
});
