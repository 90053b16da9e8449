pub mod garble;
pub mod pools;
pub mod skill;

use std::path::Path;

use sp_lexicon::TableLexicon;

/// Load a lexicon JSON file, mapping failures to a printable message.
fn load_lexicon(path: &Path) -> Result<TableLexicon, String> {
    TableLexicon::from_path(path).map_err(|e| format!("{}: {e}", path.display()))
}
