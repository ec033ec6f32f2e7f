// SkillForge Engine: Skill Document Frontmatter
//
// Module layout:
//   extract: trim, split header/body on `---` lines, decode YAML header
//   schema : per-field validators over the decoded mapping
//   parser : parse_skill / parse_skill_md, error accumulation

mod extract;
mod parser;
mod schema;

pub use extract::{split_frontmatter, Frontmatter};
pub use parser::{parse_skill, parse_skill_md};
pub use schema::normalize_platform;
