use std::fmt::Debug;
use thiserror::Error;

pub trait Named {
    fn name(&self) -> &str;
}

/// Returns the first item whose name equals `name` exactly.
pub fn find_by_name<'a, T>(name: &str, items: &'a [T]) -> Result<&'a T, NameNotFound<T>>
where
    T: Named + Clone + Debug,
{
    items.iter().find(|item| item.name() == name).ok_or_else(|| NameNotFound {
        name: name.to_string(),
        items: items.to_vec(),
    })
}

#[derive(Error, Debug)]
#[error("name '{name}' not found among {} items", .items.len())]
pub struct NameNotFound<T: Debug> {
    pub name: String,
    pub items: Vec<T>,
}
