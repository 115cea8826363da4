/// Source of fresh post ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
