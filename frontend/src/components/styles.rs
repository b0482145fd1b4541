//! Inline style snippets shared by the student record components.

pub const CARD: &str = "border:1px solid #e2e8f0;border-radius:8px;background:#fff;overflow:hidden;";
pub const INPUT: &str = "width:100%;padding:0.5rem 0.75rem;border:1px solid #cbd5e1;border-radius:6px;font-size:0.95rem;box-sizing:border-box;";
pub const INPUT_INVALID: &str = "width:100%;padding:0.5rem 0.75rem;border:1px solid #d32f2f;border-radius:6px;font-size:0.95rem;box-sizing:border-box;";
pub const PRIMARY_BUTTON: &str = "padding:0.5rem 1rem;font-size:0.95rem;background:#1976d2;color:#fff;border:none;border-radius:6px;cursor:pointer;";
pub const DANGER_BUTTON: &str = "padding:0.5rem 1rem;font-size:0.95rem;background:#d32f2f;color:#fff;border:none;border-radius:6px;cursor:pointer;";
pub const GHOST_BUTTON: &str = "padding:0.35rem 0.6rem;background:transparent;border:none;border-radius:4px;cursor:pointer;";
pub const OUTLINE_BUTTON: &str = "padding:0.5rem 1rem;font-size:0.95rem;background:#fff;color:#111;border:1px solid #cbd5e1;border-radius:6px;cursor:pointer;";
pub const MUTED_TEXT: &str = "color:#64748b;";
pub const ERROR_TEXT: &str = "color:#d32f2f;font-size:0.85rem;margin-top:0.25rem;";
