
use crate::Console;

/// Console reading from a fixed script and writing into a buffer
pub(crate) fn scripted(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

/// Everything the console has written so far
pub(crate) fn output_of(console: Console<&[u8], Vec<u8>>) -> String {
    let (_, output) = console.into_inner();
    String::from_utf8(output).unwrap()
}
