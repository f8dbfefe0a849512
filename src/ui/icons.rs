pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const EMPTY: &str = "∅";
    pub const PACKAGE: &str = "📦";
    pub const TASK: &str = "📝";
    pub const STAR: &str = "⭐";
    pub const MONEY: &str = "💰";
    pub const DOWN: &str = "⬇️";
}
