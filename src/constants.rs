// Item level bounds; requested levels are clamped into this range
pub const MIN_ITEM_LEVEL: u32 = 1;
pub const MAX_ITEM_LEVEL: u32 = 100;

// Safety bound on the affix roll loop when the pool cannot supply enough
// distinct mod groups
pub const MAX_ROLL_ATTEMPTS: u32 = 100;

// Rarity weights used when the configured triple sums to zero:
// 60% Common, 30% Magic, 10% Rare
pub const DEFAULT_COMMON_WEIGHT: f64 = 0.6;
pub const DEFAULT_MAGIC_WEIGHT: f64 = 0.3;
pub const DEFAULT_RARE_WEIGHT: f64 = 0.1;

// Neutral tier bias; raw tier weights are used unmodified
pub const NEUTRAL_TIER_BIAS: f64 = 1.0;

// Floor on the low end of the bias lerp so extreme biases cannot zero out
// the scale entirely
pub const TIER_BIAS_FLOOR: f64 = 0.01;
