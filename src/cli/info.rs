use anyhow::{Context, Result};
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use sm2117::store::{ContainerFile, ContainerStore, GroupId, Node, StoreError};

/// Display the groups, datasets and attributes of a container
pub fn run(target: PathBuf) -> Result<()> {
    if !target.exists() {
        anyhow::bail!("File does not exist: {}", target.display());
    }

    let file = ContainerFile::open_read(&target).context("Failed to open container")?;
    let store = file.store();

    let mut output = String::new();
    heading(&mut output, &target.display().to_string());
    describe_group(store, store.root(), 0, &mut output)?;
    output.push_str(&format!(
        "\n{} dataset(s)\n",
        count_tables(store, store.root())?
    ));

    print!("{}", output);
    Ok(())
}

fn heading(output: &mut String, file: &str) {
    #[cfg(feature = "colorized_output")]
    {
        output.push_str(&format!("{}\n", style("SM.2117 Container").bold().cyan()));
        output.push_str(&format!("{}\n", style("=================").cyan()));
        output.push_str(&format!("{}: {}\n\n", style("File").bold(), file));
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        output.push_str("SM.2117 Container\n");
        output.push_str("=================\n");
        output.push_str(&format!("File: {}\n\n", file));
    }
}

fn describe_group<S: ContainerStore>(
    store: &S,
    group: GroupId,
    depth: usize,
    output: &mut String,
) -> Result<(), StoreError> {
    let indent = "  ".repeat(depth);
    for (name, node) in store.children(group)? {
        match node {
            Node::Group(child) => {
                #[cfg(feature = "colorized_output")]
                output.push_str(&format!("{}{}/\n", indent, style(&name).bold().blue()));
                #[cfg(not(feature = "colorized_output"))]
                output.push_str(&format!("{}{}/\n", indent, name));

                describe_group(store, child, depth + 1, output)?;
            }
            Node::Table(table) => {
                let fields = store.field_names(table)?;
                let rows = store.row_count(table)?;

                #[cfg(feature = "colorized_output")]
                output.push_str(&format!(
                    "{}{} ({} channel(s) x {} samples)\n",
                    indent,
                    style(&name).bold().green(),
                    fields.len(),
                    rows
                ));
                #[cfg(not(feature = "colorized_output"))]
                output.push_str(&format!(
                    "{}{} ({} channel(s) x {} samples)\n",
                    indent,
                    name,
                    fields.len(),
                    rows
                ));

                output.push_str(&format!("{}  channels: {}\n", indent, fields.join(", ")));
                for (key, value) in store.attributes(table)?.iter() {
                    output.push_str(&format!("{}  {}: {}\n", indent, key, value));
                }
            }
        }
    }
    Ok(())
}

fn count_tables<S: ContainerStore>(store: &S, group: GroupId) -> Result<usize, StoreError> {
    let mut count = 0;
    for (_, node) in store.children(group)? {
        count += match node {
            Node::Group(child) => count_tables(store, child)?,
            Node::Table(_) => 1,
        };
    }
    Ok(count)
}
