//! OpenSSH-style random art ("drunken bishop")
//!
//! A bishop starts in the middle of a 17x9 board and takes four diagonal
//! steps per input byte, two bits per step, least significant pair first.
//! Each square counts its visits and is drawn with a denser symbol the more
//! often it was crossed. `S` and `E` mark the start and end squares.

const FIELD_WIDTH: usize = 17;
const FIELD_HEIGHT: usize = 9;

/// Visit counts map to these symbols; the last two are the start/end markers
const SYMBOLS: &[u8] = b" .o+=*BOX@%&#/^SE";
const START_SYMBOL: u8 = (SYMBOLS.len() - 2) as u8;
const END_SYMBOL: u8 = (SYMBOLS.len() - 1) as u8;
const MAX_VISITS: u8 = (SYMBOLS.len() - 3) as u8;

/// Total rows produced by [`randomart`], borders included
pub const ART_HEIGHT: usize = FIELD_HEIGHT + 2;
/// Columns of every row produced by [`randomart`], borders included
pub const ART_WIDTH: usize = FIELD_WIDTH + 2;

/// Draws the random art for `input`
///
/// Returns `ART_HEIGHT` rows of `ART_WIDTH` ASCII characters joined with
/// `\n`, without a trailing newline. Same input, same picture.
pub fn randomart(input: &str) -> String {
    let mut field = [[0u8; FIELD_WIDTH]; FIELD_HEIGHT];
    let start = (FIELD_WIDTH / 2, FIELD_HEIGHT / 2);
    let (mut x, mut y) = start;

    for byte in input.bytes() {
        let mut bits = byte;
        for _ in 0..4 {
            x = if bits & 0x1 != 0 {
                (x + 1).min(FIELD_WIDTH - 1)
            } else {
                x.saturating_sub(1)
            };
            y = if bits & 0x2 != 0 {
                (y + 1).min(FIELD_HEIGHT - 1)
            } else {
                y.saturating_sub(1)
            };

            if field[y][x] < MAX_VISITS {
                field[y][x] += 1;
            }
            bits >>= 2;
        }
    }

    field[start.1][start.0] = START_SYMBOL;
    field[y][x] = END_SYMBOL;

    let border = format!("+{}+", "-".repeat(FIELD_WIDTH));
    let mut rows = Vec::with_capacity(ART_HEIGHT);
    rows.push(border.clone());
    for line in &field {
        let cells: String = line
            .iter()
            .map(|&count| char::from(SYMBOLS[usize::from(count)]))
            .collect();
        rows.push(format!("|{cells}|"));
    }
    rows.push(border);

    rows.join("\n")
}
