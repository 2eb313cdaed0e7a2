use std::collections::HashMap;

use gilib_core::{GuiError, WidgetId};

use crate::widget::Widget;

/// Owns every widget of a GUI, keyed by id.
///
/// Parent links live on the widgets as plain ids, so the hierarchy never
/// holds references into the registry.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: HashMap<WidgetId, Box<dyn Widget>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    pub fn add(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = widget.id();
        self.widgets.insert(id, widget);
        id
    }

    /// Register `widget` as a child of `parent`.
    pub fn add_child(&mut self, parent: WidgetId, mut widget: Box<dyn Widget>) -> Result<WidgetId, GuiError> {
        if !self.contains(&parent) {
            return Err(GuiError::UnknownWidget(parent));
        }
        widget.set_parent(Some(parent));
        Ok(self.add(widget))
    }

    /// Remove a widget. Its children are kept and become parentless.
    pub fn remove(&mut self, id: &WidgetId) -> Option<Box<dyn Widget>> {
        let removed = self.widgets.remove(id)?;
        for widget in self.widgets.values_mut() {
            if widget.parent() == Some(*id) {
                widget.set_parent(None);
            }
        }
        Some(removed)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn get(&self, id: &WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|w| w.as_ref())
    }

    pub fn get_mut(&mut self, id: &WidgetId) -> Option<&mut dyn Widget> {
        self.widgets.get_mut(id).map(|w| &mut **w as &mut dyn Widget)
    }

    /// Look up a widget as its concrete type.
    pub fn get_as<T: Widget + 'static>(&self, id: &WidgetId) -> Option<&T> {
        self.get(id)?.as_any().downcast_ref::<T>()
    }

    pub fn get_as_mut<T: Widget + 'static>(&mut self, id: &WidgetId) -> Option<&mut T> {
        self.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    pub fn parent_of(&self, id: &WidgetId) -> Option<WidgetId> {
        self.get(id)?.parent()
    }

    /// Ids of the widgets whose parent is `id`.
    pub fn children_of(&self, id: &WidgetId) -> Vec<WidgetId> {
        self.widgets
            .values()
            .filter(|w| w.parent() == Some(*id))
            .map(|w| w.id())
            .collect()
    }

    /// Parent chain of `id`, nearest first. Stops at a missing widget or a
    /// cycle.
    pub fn ancestors(&self, id: &WidgetId) -> Vec<WidgetId> {
        let mut chain = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(parent) = current {
            if parent == *id || chain.contains(&parent) {
                break;
            }
            chain.push(parent);
            current = self.parent_of(&parent);
        }
        chain
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RectWidget;

    #[test]
    fn test_add_and_get() {
        let mut reg = WidgetRegistry::new();
        let id = reg.add(Box::new(RectWidget::new(800.0, 600.0)));
        assert_eq!(reg.len(), 1);
        assert!(reg.get(&id).is_some());
        assert!(reg.get_as::<RectWidget>(&id).is_some());
    }

    #[test]
    fn test_parent_links() {
        let mut reg = WidgetRegistry::new();
        let root = reg.add(Box::new(RectWidget::new(800.0, 600.0)));
        let child = reg.add_child(root, Box::new(RectWidget::new(800.0, 600.0))).unwrap();
        let leaf = reg.add_child(child, Box::new(RectWidget::new(800.0, 600.0))).unwrap();

        assert_eq!(reg.parent_of(&child), Some(root));
        assert_eq!(reg.children_of(&root), vec![child]);
        assert_eq!(reg.ancestors(&leaf), vec![child, root]);
        assert!(reg.ancestors(&root).is_empty());
    }

    #[test]
    fn test_add_child_unknown_parent() {
        let mut reg = WidgetRegistry::new();
        let stray = RectWidget::new(10.0, 10.0);
        let missing = stray.id();
        let err = reg
            .add_child(missing, Box::new(RectWidget::new(10.0, 10.0)))
            .unwrap_err();
        assert!(matches!(err, GuiError::UnknownWidget(id) if id == missing));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_remove_orphans_children() {
        let mut reg = WidgetRegistry::new();
        let root = reg.add(Box::new(RectWidget::new(800.0, 600.0)));
        let child = reg.add_child(root, Box::new(RectWidget::new(800.0, 600.0))).unwrap();
        assert!(reg.remove(&root).is_some());
        assert_eq!(reg.parent_of(&child), None);
        assert!(reg.remove(&root).is_none());
    }

    #[test]
    fn test_get_as_mut() {
        let mut reg = WidgetRegistry::new();
        let id = reg.add(Box::new(RectWidget::new(800.0, 600.0)));
        reg.get_as_mut::<RectWidget>(&id)
            .unwrap()
            .set_size(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            reg.get_as::<RectWidget>(&id).unwrap().bounds(),
            gilib_core::Bounds::new(1.0, 2.0, 3.0, 4.0)
        );
    }
}
