//! Last-writer-wins reconciliation of local and remote collections.

use crate::quotes::QuoteRecord;

/// Merge a remote snapshot into the local collection.
///
/// Identity is `server_id`: records without one are local-only and survive
/// unchanged. A remote record replaces its local counterpart in place only
/// when the local timestamp is missing or strictly older than the remote
/// one. Remote records with no local counterpart are appended in encounter
/// order; all other entries keep the original local order.
pub fn merge_quotes(local: &[QuoteRecord], remote: &[QuoteRecord]) -> Vec<QuoteRecord> {
    let mut merged = local.to_vec();

    for remote_quote in remote {
        let position = merged
            .iter()
            .position(|q| q.server_id.is_some() && q.server_id == remote_quote.server_id);

        match position {
            // New record from the server.
            None => merged.push(remote_quote.clone()),
            Some(index) => {
                if remote_wins(merged[index].timestamp, remote_quote.timestamp) {
                    merged[index] = remote_quote.clone();
                }
            }
        }
    }

    merged
}

/// A missing local timestamp always loses; otherwise the remote record wins
/// only with a strictly greater timestamp.
fn remote_wins(local_timestamp: Option<i64>, remote_timestamp: Option<i64>) -> bool {
    match (local_timestamp, remote_timestamp) {
        (None, _) => true,
        (Some(local), Some(remote)) => remote > local,
        (Some(_), None) => false,
    }
}
