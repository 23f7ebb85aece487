pub mod create_video;
pub mod update_media_status;
pub mod update_video;

/// Convert raw string identifiers into typed ids, deduplicating while
/// preserving command order (error messages list missing ids in this
/// order).
pub(crate) fn to_unique_ids<I, F>(values: &[String], make: F) -> Vec<I>
where
    I: PartialEq,
    F: Fn(&str) -> I,
{
    let mut ids: Vec<I> = Vec::with_capacity(values.len());
    for value in values {
        let id = make(value);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
