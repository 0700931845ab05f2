use clap::ArgMatches;

use super::{resolve_entry, store_err};
use crate::cli::{print, typo};
use crate::database::Catalog;

pub fn run<C: Catalog>(catalog: &C, matches: &ArgMatches) -> Result<(), String> {
    let path = matches.value_of("path").expect("path is required");
    let entry = resolve_entry(catalog, path)?;
    let all = catalog.metadata(&entry).map_err(store_err)?;

    let selected = match matches.values_of("keys") {
        None => all,
        Some(keys) => {
            let mut picked = Vec::new();
            for k in keys {
                match all.iter().find(|(key, _)| key == k) {
                    Some(pair) => picked.push(pair.clone()),
                    None => {
                        let hint = typo::suggest(k, all.iter().map(|(key, _)| key.as_str()));
                        return Err(match hint {
                            Some(s) => {
                                format!("no key '{}' on '{}'; did you mean '{}'?", k, path, s)
                            }
                            None => format!("no key '{}' on '{}'", k, path),
                        });
                    }
                }
            }
            picked
        }
    };

    print::pairs(&selected);
    Ok(())
}
