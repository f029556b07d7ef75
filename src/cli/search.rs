use tabled::Table;

use crate::{error, spotify::SpotifyClient, success, types::Lookup, utils, warning};

use super::spinner;

/// Searches the catalog and prints the hits as a table.
///
/// A search the provider refuses is reported as a warning together with the
/// status it returned. Authentication and network failures end the program.
pub async fn search(client: &SpotifyClient, query: &str, search_type: &str) {
    let search_type = utils::normalize_search_type(search_type);
    let pb = spinner(format!("Searching {search_type}s for \"{query}\"..."));
    let result = client.fetch_search(query, &search_type).await;
    pb.finish_and_clear();

    match result {
        Ok(Lookup::Found(results)) => {
            let rows = utils::search_rows(&results, &search_type);
            if rows.is_empty() {
                warning!("No {}s found for \"{}\".", search_type, query);
                return;
            }

            let count = rows.len();
            println!("{}", Table::new(rows));
            success!("Found {} {}s.", count, search_type);
        }
        Ok(Lookup::Unavailable { status, .. }) => {
            warning!("Spotify answered the search with {}.", status)
        }
        Err(e) => error!("Search failed. Err: {}", e),
    }
}
