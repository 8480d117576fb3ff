//! Application Context
//!
//! Shared state provided via Leptos Context API: active tab, reload
//! triggers, catalog order and the current user notice.

use leptos::prelude::*;

use crate::api::IngredientOrder;

/// The two top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Recipes,
    Ingredients,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Recipes, Tab::Ingredients];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Recipes => "Recetas",
            Tab::Ingredients => "Ingredientes",
        }
    }

    /// Class for this tab's panel given the currently active tab.
    pub fn panel_class(self, active: Tab) -> &'static str {
        if self == active {
            "tab-content active"
        } else {
            "tab-content"
        }
    }

    /// Class for this tab's nav pill given the currently active tab.
    pub fn pill_class(self, active: Tab) -> &'static str {
        if self == active {
            "pill-button active"
        } else {
            "pill-button"
        }
    }
}

/// Severity of a user notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A message shown in the status bar until dismissed or replaced.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently active view
    pub active_tab: RwSignal<Tab>,
    /// Last-used catalog order, re-applied by every refresh
    pub ingredient_order: RwSignal<IngredientOrder>,
    /// Current user notice, if any
    pub notice: RwSignal<Option<Notice>>,
    /// Trigger to reload recipes from the collaborator - read
    pub recipes_trigger: ReadSignal<u32>,
    /// Trigger to reload recipes from the collaborator - write
    set_recipes_trigger: WriteSignal<u32>,
    /// Trigger to reload the ingredient catalog - read
    pub ingredients_trigger: ReadSignal<u32>,
    /// Trigger to reload the ingredient catalog - write
    set_ingredients_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (recipes_trigger, set_recipes_trigger) = signal(0u32);
        let (ingredients_trigger, set_ingredients_trigger) = signal(0u32);
        Self {
            active_tab: RwSignal::new(Tab::Recipes),
            ingredient_order: RwSignal::new(IngredientOrder::default()),
            notice: RwSignal::new(None),
            recipes_trigger,
            set_recipes_trigger,
            ingredients_trigger,
            set_ingredients_trigger,
        }
    }

    /// Trigger a reload of the recipe list
    pub fn reload_recipes(&self) {
        self.set_recipes_trigger.update(|v| *v += 1);
    }

    /// Trigger a reload of the ingredient catalog
    pub fn reload_ingredients(&self) {
        self.set_ingredients_trigger.update(|v| *v += 1);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notice.set(Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notice.set(Some(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }));
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_panel_and_pill_active_per_tab() {
        for active in Tab::ALL {
            let active_panels = Tab::ALL
                .iter()
                .filter(|tab| tab.panel_class(active).ends_with("active"))
                .count();
            let active_pills = Tab::ALL
                .iter()
                .filter(|tab| tab.pill_class(active).ends_with("active"))
                .count();
            assert_eq!(active_panels, 1);
            assert_eq!(active_pills, 1);
        }
    }

    #[test]
    fn switching_is_idempotent() {
        // Re-activating the active tab changes nothing
        assert_eq!(
            Tab::Recipes.panel_class(Tab::Recipes),
            Tab::Recipes.panel_class(Tab::Recipes)
        );
        assert_eq!(Tab::Ingredients.panel_class(Tab::Recipes), "tab-content");
    }
}
