/// 1-based line number of the byte at `offset`.
pub fn line_number_at_offset(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}
