use clap::ArgMatches;
use colored::Colorize;
use serde::Serialize;

use super::{resolve_entry, store_err};
use crate::database::{path as catalog_path, Catalog, Entry};
use crate::format::hex;

#[derive(Serialize)]
struct LsEntry {
    kind: &'static str,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<String>,
}

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let path_arg = matches.value_of("path").expect("path has a default");
    let entry = resolve_entry(catalog, path_arg)?;

    let dir = match entry {
        Entry::Directory(d) => d,
        Entry::File(f) => {
            // `ls` on a file shows just that file.
            let full = catalog
                .entry_path(&Entry::File(f.clone()))
                .map_err(store_err)?;
            if matches.is_present("json") {
                let single = vec![LsEntry {
                    kind: "file",
                    path: full,
                    hash: Some(hex::encode(&f.hash)),
                }];
                println!(
                    "{}",
                    serde_json::to_string_pretty(&single).map_err(|e| e.to_string())?
                );
            } else {
                println!("{}  {}", hex::encode(&f.hash).dimmed(), full);
            }
            return Ok(());
        }
    };

    let subdirs: Vec<_> = catalog
        .directories()
        .map_err(store_err)?
        .into_iter()
        .filter(|d| catalog_path::parent_dir(&d.path) == Some(dir.path.as_str()))
        .collect();
    let files = catalog.directory_files(dir.id).map_err(store_err)?;

    if matches.is_present("json") {
        let mut entries = Vec::with_capacity(subdirs.len() + files.len());
        for d in &subdirs {
            entries.push(LsEntry {
                kind: "directory",
                path: d.path.clone(),
                hash: None,
            });
        }
        for f in &files {
            entries.push(LsEntry {
                kind: "file",
                path: catalog_path::join(&dir.path, &f.filename),
                hash: Some(hex::encode(&f.hash)),
            });
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    for d in &subdirs {
        println!("{}/", catalog_path::filename(&d.path).blue().bold());
    }
    for f in &files {
        println!("{}  {}", hex::encode(&f.hash).dimmed(), f.filename);
    }
    Ok(())
}
