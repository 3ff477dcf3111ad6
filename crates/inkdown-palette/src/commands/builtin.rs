use super::{Command, ParamKind};

/// Returns the default command set of the editor.
///
/// Shortcut aliases use the `:` sentinel and must stay unique across the
/// whole set; the catalog's alias index resolves collisions first-writer-wins
/// rather than rejecting them.
pub fn builtin_commands() -> Vec<Command> {
    vec![
        Command::new("file.new", "New document", "Create a blank markdown document")
            .with_category("file")
            .with_icon("file-plus")
            .with_alias(":n"),
        Command::new("file.open", "Open document", "Open an existing document")
            .with_category("file")
            .with_icon("folder-open")
            .with_aliases(&[":o", ":e"]),
        Command::new("file.save", "Save document", "Write the current document")
            .with_category("file")
            .with_icon("save")
            .with_aliases(&[":s", ":w"])
            .with_priority(-1),
        Command::new("file.save-as", "Save document as", "Write the document under a new name")
            .with_category("file")
            .with_alias(":sa")
            .with_param("name", true, ParamKind::String),
        Command::new("file.rename", "Rename document", "Rename the current document")
            .with_category("file")
            .with_param("name", true, ParamKind::String),
        Command::new("file.delete", "Delete document", "Move the current document to trash")
            .with_category("file"),
        Command::new("edit.undo", "Undo", "Undo the last edit")
            .with_category("edit")
            .with_alias(":u"),
        Command::new("edit.redo", "Redo", "Redo the last undone edit")
            .with_category("edit"),
        Command::new("edit.find", "Find in document", "Search the document text")
            .with_category("edit")
            .with_alias(":f"),
        Command::new("edit.replace", "Find and replace", "Replace matches in the document")
            .with_category("edit")
            .with_alias(":fr"),
        Command::new("format.bold", "Toggle bold", "Wrap the selection in strong emphasis")
            .with_category("format"),
        Command::new("format.italic", "Toggle italic", "Wrap the selection in emphasis")
            .with_category("format"),
        Command::new("format.heading", "Cycle heading level", "Cycle the heading level of the current line")
            .with_category("format")
            .with_param("level", false, ParamKind::Number),
        Command::new("format.code-block", "Insert code block", "Insert a fenced code block")
            .with_category("format")
            .with_alias(":cb"),
        Command::new("format.table", "Insert table", "Insert a markdown table")
            .with_category("format")
            .with_alias(":tb"),
        Command::new("format.link", "Insert link", "Insert a markdown link")
            .with_category("format")
            .with_alias(":l"),
        Command::new("view.preview", "Toggle preview pane", "Show or hide the rendered preview")
            .with_category("view")
            .with_alias(":p"),
        Command::new("view.toc", "Toggle table of contents", "Show or hide the outline panel")
            .with_category("view")
            .with_alias(":toc"),
        Command::new("view.focus", "Toggle focus mode", "Hide everything except the editor")
            .with_category("view"),
        Command::new("view.theme", "Switch color theme", "Switch between light and dark themes")
            .with_category("view")
            .with_param("theme", false, ParamKind::String),
    ]
}
