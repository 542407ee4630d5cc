pub mod errors;

use std::ops::Range;

use errors::PageError;

/// Printable area of a page, in character units. Both counts are derived
/// externally (font metrics against the imageable area); this module only
/// consumes them.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub lines_per_page: usize,
    pub chars_per_page: usize,
}

impl PageGeometry {
    /// Derives a geometry from raw printable-area metrics: imageable height
    /// divided by line height, imageable width divided by the average glyph
    /// width. Fractional lines and columns are discarded.
    pub fn from_metrics(
        imageable_height: f64,
        line_height: f64,
        imageable_width: f64,
        avg_char_width: f64,
    ) -> Self {
        let lines_per_page = if line_height > 0.0 {
            (imageable_height / line_height).floor().max(0.0) as usize
        } else {
            0
        };
        let chars_per_page = if avg_char_width > 0.0 {
            (imageable_width / avg_char_width).floor().max(0.0) as usize
        } else {
            0
        };
        PageGeometry {
            lines_per_page,
            chars_per_page,
        }
    }
}

/// Page boundaries for one loaded file, computed once and cached for the
/// life of that file's print job.
///
/// Break `b` (1-based) sits at line index `b * lines_per_page`, for `b`
/// from 1 up to `(total_lines - 1) / lines_per_page`. Page 0 starts at
/// line 0 and the last page ends at `total_lines`, so a document always
/// has at least one page, even when it has no lines.
#[derive(Debug, Clone)]
pub struct PageLayout {
    breaks: Vec<usize>,
    total_lines: usize,
}

impl PageLayout {
    pub fn build(total_lines: usize, geometry: &PageGeometry) -> Result<Self, PageError> {
        let lines_per_page = geometry.lines_per_page;
        if lines_per_page == 0 {
            return Err(PageError::InvalidLinesPerPage);
        }

        let num_breaks = total_lines.saturating_sub(1) / lines_per_page;
        let breaks = (1..=num_breaks).map(|b| b * lines_per_page).collect();

        Ok(PageLayout {
            breaks,
            total_lines,
        })
    }

    pub fn page_count(&self) -> usize {
        self.breaks.len() + 1
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    /// The half-open line range covered by the zero-based `page` index.
    pub fn page_span(&self, page: usize) -> Result<Range<usize>, PageError> {
        if page > self.breaks.len() {
            return Err(PageError::NoSuchPage {
                page,
                pages: self.page_count(),
            });
        }

        let start = if page == 0 { 0 } else { self.breaks[page - 1] };
        let end = if page == self.breaks.len() {
            self.total_lines
        } else {
            self.breaks[page]
        };
        Ok(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(lines_per_page: usize) -> PageGeometry {
        PageGeometry {
            lines_per_page,
            chars_per_page: 80,
        }
    }

    #[test]
    fn breaks_for_partial_last_page() {
        let layout = PageLayout::build(125, &geometry(50)).unwrap();
        assert_eq!(layout.breaks(), [50, 100]);
        assert_eq!(layout.page_count(), 3);
        assert_eq!(layout.page_span(0).unwrap(), 0..50);
        assert_eq!(layout.page_span(1).unwrap(), 50..100);
        assert_eq!(layout.page_span(2).unwrap(), 100..125);
        assert!(matches!(
            layout.page_span(3),
            Err(PageError::NoSuchPage { page: 3, pages: 3 })
        ));
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let layout = PageLayout::build(100, &geometry(50)).unwrap();
        assert_eq!(layout.breaks(), [50]);
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.page_span(1).unwrap(), 50..100);
    }

    #[test]
    fn empty_document_is_one_empty_page() {
        let layout = PageLayout::build(0, &geometry(50)).unwrap();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.page_span(0).unwrap(), 0..0);
    }

    #[test]
    fn zero_lines_per_page_is_rejected() {
        assert!(matches!(
            PageLayout::build(10, &geometry(0)),
            Err(PageError::InvalidLinesPerPage)
        ));
    }

    #[test]
    fn geometry_from_metrics_floors() {
        let g = PageGeometry::from_metrics(648.0, 11.0, 468.0, 6.0);
        assert_eq!(g.lines_per_page, 58);
        assert_eq!(g.chars_per_page, 78);
    }
}
