//! Contiguous-slice pagination.

use sevaka_core::employee::Employee;

/// One page of a filtered employee listing.
#[derive(Debug, Clone)]
pub struct Page<'a> {
  pub items:       Vec<&'a Employee>,
  /// Size of the filtered collection, before slicing.
  pub total:       usize,
  pub page:        usize,
  pub page_size:   usize,
  pub total_pages: usize,
}

/// Slice `[(page - 1) * page_size, page * page_size)` out of `items`.
/// Page and size are clamped to at least 1, and `total_pages` is never 0
/// even for an empty collection.
pub fn paginate<'a>(
  items: &[&'a Employee],
  page: usize,
  page_size: usize,
) -> Page<'a> {
  let page_size = page_size.max(1);
  let page = page.max(1);
  let total = items.len();
  let total_pages = total.div_ceil(page_size).max(1);

  let start = (page - 1).saturating_mul(page_size).min(total);
  let end = start.saturating_add(page_size).min(total);

  Page {
    items: items[start..end].to_vec(),
    total,
    page,
    page_size,
    total_pages,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
