pub struct Icons;

impl Icons {
    pub const CHEST: &str = "📦";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
}
