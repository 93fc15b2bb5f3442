//! Commands Layer
//!
//! Thin async handlers a UI shell invokes; errors cross the boundary as
//! strings.

mod brief_cmd;
mod character_cmd;
mod dashboard_cmd;
mod delete_cmd;
mod file_cmd;
mod finance_cmd;
mod folder_cmd;
mod link_cmd;
mod moodboard_cmd;
mod note_cmd;
mod resume_cmd;
mod settings_cmd;
mod style_cmd;
mod task_cmd;

pub use brief_cmd::{
    brief_ai_assist, build_brief_reference, create_brief, list_briefs, toggle_pin_brief,
    update_brief,
};
pub use character_cmd::{
    chat_log, create_character, delete_character, list_characters, send_chat_message,
    update_character,
};
pub use dashboard_cmd::{design_news, overview, smart_search, Overview};
pub use delete_cmd::{cancel_delete, confirm_delete, pending_delete, request_delete};
pub use file_cmd::{list_files, reorder_file, update_file, upload_file};
pub use finance_cmd::{
    add_transaction, delete_transaction, export_month_csv, list_transactions, month_totals,
    month_transactions, update_transaction, yearly_overview,
};
pub use folder_cmd::{
    breadcrumbs, create_folder, current_folder, folder_history, list_folders, open_folder,
    set_view_mode, update_folder, view_mode,
};
pub use link_cmd::{create_link, list_links, update_link};
pub use moodboard_cmd::{
    add_moodboard_image, create_moodboard, list_moodboards, remove_moodboard_image,
    update_moodboard,
};
pub use note_cmd::{create_note, list_notes, update_note};
pub use resume_cmd::{
    add_education, add_experience, add_skill, clear_resume, get_resume, remove_education,
    remove_experience, remove_skill, update_education, update_experience, update_resume_profile,
};
pub use settings_cmd::{get_language, get_theme, set_language, set_theme};
pub use style_cmd::{
    get_style, list_style_categories, list_styles, search_styles, styles_by_category,
};
pub use task_cmd::{create_task, list_tasks, toggle_task, update_task};
