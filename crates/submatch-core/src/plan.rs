//! What renames would align each matched pair. Nothing is touched on disk;
//! the plan is handed to whoever executes it.

use crate::normalize::split_extension;
use crate::result::MatchResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameAction {
    Rename { from: String, to: String },
    AlreadyNamed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    actions: Vec<RenameAction>,
}

impl RenamePlan {
    /// One action per matched pair, in mapping order.
    ///
    /// Forward: the movie (`a`) takes the subtitle's stem and keeps its own
    /// extension. Reverse: the subtitle (`b`) takes the movie's stem.
    pub fn build(result: &MatchResult, reverse: bool) -> Self {
        let actions = result
            .pairs()
            .iter()
            .map(|pair| {
                let (source, template) = if reverse {
                    (&pair.b, &pair.a)
                } else {
                    (&pair.a, &pair.b)
                };
                rename_to_match(source, template)
            })
            .collect();

        Self { actions }
    }

    pub fn actions(&self) -> &[RenameAction] {
        &self.actions
    }

    pub fn renames(&self) -> impl Iterator<Item = (&str, &str)> {
        self.actions.iter().filter_map(|action| match action {
            RenameAction::Rename { from, to } => Some((from.as_str(), to.as_str())),
            RenameAction::AlreadyNamed(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn rename_to_match(source: &str, template: &str) -> RenameAction {
    let (_, source_ext) = split_extension(source);
    let (template_stem, _) = split_extension(template);
    let target = format!("{}{}", template_stem, source_ext);

    if target == source {
        RenameAction::AlreadyNamed(source.to_string())
    } else {
        RenameAction::Rename {
            from: source.to_string(),
            to: target,
        }
    }
}
