/// Returns a fresh unique identifier for a new friend.
///
/// Every caller goes through this single function, so the id source can be
/// swapped without touching the forms or the registry.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
