/// Types that expose a comparable name.
pub trait HasName {
    fn get_name(&self) -> &str;
}

// Delegate HasName to references (and smart pointers if useful)
impl<T: HasName + ?Sized> HasName for &T {
    fn get_name(&self) -> &str {
        (*self).get_name()
    }
}
impl<T: HasName + ?Sized> HasName for Box<T> {
    fn get_name(&self) -> &str {
        (**self).get_name()
    }
}

/// Finds the first item with a matching name.
///
/// The ingested sequences preserve stream order, so "first" is the order in
/// which the producing tool emitted the entities.
pub fn find_by_name<'a, T: HasName>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.get_name() == name)
}
