//! Note display formatting

use crate::models::Note;

/// Format notes as a numbered list with their tags
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }

    let num_width = notes.len().to_string().len();
    let mut output = String::new();

    for (i, note) in notes.iter().enumerate() {
        output.push_str(&format!("{:>num_width$}. {}\n", i + 1, note.text));
        if !note.tags.is_empty() {
            output.push_str(&format!(
                "{:>num_width$}  [{}]\n",
                "",
                note.tags_display()
            ));
        }
    }

    output
}
