// SkillForge Engine: skill document processing
// Pure, synchronous functions over text and registries. No I/O apart from
// the explicit config loaders in `registry` and `skills::quality`.

pub mod registry;
pub mod skills;
