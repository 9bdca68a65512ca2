//! Index-targeted edits over ordered lists.

/// Applies `edit` to the item at `index`. Returns whatever `edit` reports,
/// or `false` when `index` is out of range.
pub fn update_at<T>(items: &mut [T], index: usize, edit: impl FnOnce(&mut T) -> bool) -> bool {
    match items.get_mut(index) {
        Some(item) => edit(item),
        None => false,
    }
}

/// Removes the item at `index`. Returns `false` when out of range.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index >= items.len() {
        return false;
    }
    items.remove(index);
    true
}

/// Replaces one certification and drops every entry left blank.
pub fn set_certification(certifications: &mut Vec<String>, index: usize, value: &str) -> bool {
    if index >= certifications.len() {
        return false;
    }
    let before = certifications.clone();
    certifications[index] = value.to_string();
    certifications.retain(|entry| !entry.trim().is_empty());
    *certifications != before
}
