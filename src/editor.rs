//! Admin editor - stages edits for one language and commits them as a whole.
//!
//! ```text
//! Idle(lang) --edit--> Editing(draft) --save--> Idle(lang)
//!                      Editing(draft) --select_language(l')--> Idle(l')   draft discarded
//! ```
//!
//! The draft is built once, when the language is selected. It does not
//! follow saves made elsewhere; the last save wins.

use std::sync::Arc;

use crate::catalog::TranslationCatalog;
use crate::content::EffectiveContent;
use crate::error::SaveError;
use crate::language::Language;
use crate::store::ContentStore;

/// Where the editor is in its edit/save cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    /// Draft matches what was loaded or last saved.
    Idle,
    /// Draft has been touched since.
    Editing,
}

pub struct AdminEditor {
    store: Arc<dyn ContentStore>,
    catalog: Arc<dyn TranslationCatalog>,
    language: Language,
    draft: EffectiveContent,
    state: EditorState,
}

impl AdminEditor {
    /// Start an editing session on `language`, draft pre-filled with
    /// `override ?? default` for every field.
    pub fn open(
        store: Arc<dyn ContentStore>,
        catalog: Arc<dyn TranslationCatalog>,
        language: Language,
    ) -> Self {
        let draft = Self::build_draft(store.as_ref(), catalog.as_ref(), language);
        Self {
            store,
            catalog,
            language,
            draft,
            state: EditorState::Idle,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &EffectiveContent {
        &self.draft
    }

    /// True when the draft has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.state == EditorState::Editing
    }

    /// Modify the draft. Any string is accepted, including an empty one,
    /// which is saved as a deliberate blank.
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut EffectiveContent),
    {
        f(&mut self.draft);
        self.state = EditorState::Editing;
    }

    /// Switch the editing language. Unsaved edits are discarded.
    pub fn select_language(&mut self, language: Language) {
        if self.is_dirty() {
            tracing::debug!(from = %self.language, to = %language, "discarding unsaved draft");
        }
        self.language = language;
        self.reload();
    }

    /// Throw away unsaved edits and rebuild the draft from the store.
    pub fn discard(&mut self) {
        self.reload();
    }

    /// Commit the full draft as this language's overrides.
    ///
    /// Only this language's entry is replaced; the other language is left as
    /// stored. On failure the draft is kept so the save can be retried.
    pub fn save(&mut self) -> Result<(), SaveError> {
        let mut doc = self.store.load();
        doc.set(self.language, self.draft.to_overrides());

        match self.store.save(&doc) {
            Ok(()) => {
                tracing::debug!(language = %self.language, "content saved from editor");
                self.state = EditorState::Idle;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(language = %self.language, error = %e, "editor save failed");
                Err(e)
            }
        }
    }

    fn reload(&mut self) {
        self.draft = Self::build_draft(self.store.as_ref(), self.catalog.as_ref(), self.language);
        self.state = EditorState::Idle;
    }

    fn build_draft(
        store: &dyn ContentStore,
        catalog: &dyn TranslationCatalog,
        language: Language,
    ) -> EffectiveContent {
        store
            .load_language(language)
            .resolve(&catalog.defaults(language))
    }
}
