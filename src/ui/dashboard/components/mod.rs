//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod logs;
pub mod metrics;
pub mod reviews;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Rows of a rendered buffer as plain strings, one char per cell.
    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Position of the first cell of `needle` in the buffer.
    pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        buffer_lines(buffer)
            .iter()
            .enumerate()
            .find_map(|(y, line)| {
                line.find(needle)
                    .map(|idx| (line[..idx].chars().count() as u16, y as u16))
            })
    }
}
