//! Built-in puzzle data: the walled yard and the dog piece catalog.
//!
//! Each shape is a block of text where any non-blank character marks an
//! occupied cell. Literals open and close with a newline and short rows are
//! padded by the parser, so the blocks below read the way the pieces look.

use crate::board::Board;
use crate::pieces::Piece;

/// The standard 8x8 yard. `■` squares are walls the dogs cannot occupy,
/// leaving 56 free cells.
pub const YARD: &str = "
■     ■■
       ■




■
■■     ■
";

// The catalog of dog shapes, smallest breeds first.

/// 1 square.
pub const VIVI: &str = "
X
";

/// 2 squares.
pub const ROCCO: &str = "
X
X
";

/// 3 squares.
pub const YASKA: &str = "
XXX
";

/// 3 squares.
pub const EIKA: &str = "
 X
XX
";

/// 4 squares.
pub const GARIBALDI: &str = "
XX
XX
";

/// 4 squares.
pub const MARBLE: &str = "
XXX
 X
";

/// 4 squares.
pub const OAKLEY: &str = "
X
XX
 X
";

/// 4 squares.
pub const STRAWBERRY: &str = "
X
X
XX
";

/// 4 squares.
pub const MOE: &str = "
 X
 X
XX
";

/// 5 squares.
pub const BELLE: &str = "
XX
XXX
";

/// 5 squares.
pub const SIR_ALFIE: &str = "
X
XX
XX
";

/// 5 squares.
pub const ZOE: &str = "
XXX
X X
";

/// 6 squares.
pub const MUCKI: &str = "
XX
 XXXX
";

/// 6 squares.
pub const MIKKO: &str = "
  XX
XXXX
";

/// 6 squares.
pub const BORKO: &str = "
 X
XXX
XX
";

/// 7 squares.
pub const POLKA: &str = "
XX
XX
XXX
";

/// 7 squares.
pub const ELLIE: &str = "
 XX
 XX
XXX
";

/// 7 squares.
pub const DUKE: &str = "
XX
 X
 X
 X
XX
";

/// 8 squares.
pub const LULU: &str = "
XX
XXX
XXX
";

/// 8 squares.
pub const ABBY: &str = "
  XX
  XX
XXXX
";

/// 9 squares.
pub const REX: &str = "
XXX
XXX
XXX
";

/// 10 squares.
pub const WANNI: &str = "
XX
XXXX
XXXX
";

/// 10 squares.
pub const RUST: &str = "
XXX
 XX
 XX
XXX
";

/// 10 squares.
pub const GOLDIE: &str = "
   X
XXXX
XXXX
   X
";

/// 15 squares.
pub const KORRA: &str = "
XX
XX
XXX
XXXX
XXXX
";

/// 16 squares.
pub const KAFKA: &str = "
X
X
XX
XX
XXXX
XXXXXX
";

/// 20 squares.
pub const MAX: &str = "
XX  X
XX  X
XXXXX
XXXXX
XX XX
";

/// 21 squares.
pub const ROMY: &str = "
XXXXXXXX
XXXXXXXX
  X   XX
      XX
";

/// Every breed in the catalog, paired with its display name.
pub const BREEDS: &[(&str, &str)] = &[
    ("Vivi", VIVI),
    ("Rocco", ROCCO),
    ("Yaska", YASKA),
    ("Eika", EIKA),
    ("Garibaldi", GARIBALDI),
    ("Marble", MARBLE),
    ("Oakley", OAKLEY),
    ("Strawberry", STRAWBERRY),
    ("Moe", MOE),
    ("Belle", BELLE),
    ("Sir Alfie", SIR_ALFIE),
    ("Zoe", ZOE),
    ("Mucki", MUCKI),
    ("Mikko", MIKKO),
    ("Borko", BORKO),
    ("Polka", POLKA),
    ("Ellie", ELLIE),
    ("Duke", DUKE),
    ("Lulu", LULU),
    ("Abby", ABBY),
    ("Rex", REX),
    ("Wanni", WANNI),
    ("Rust", RUST),
    ("Goldie", GOLDIE),
    ("Korra", KORRA),
    ("Kafka", KAFKA),
    ("Max", MAX),
    ("Romy", ROMY),
];

/// The standard yard, freshly parsed.
pub fn standard_board() -> Board {
    Board::from_text(YARD)
}

/// The standard ten-dog lineup whose 56 squares exactly cover the yard.
/// Borko is in the lineup twice.
pub fn standard_pieces() -> Vec<Piece> {
    vec![
        Piece::new("Eika", EIKA),
        Piece::new("Wanni", WANNI),
        Piece::new("Vivi", VIVI),
        Piece::new("Borko", BORKO),
        Piece::new("Rust", RUST),
        Piece::new("Oakley", OAKLEY),
        Piece::new("Marble", MARBLE),
        Piece::new("Mikko", MIKKO),
        Piece::new("Borko", BORKO),
        Piece::new("Mucki", MUCKI),
    ]
}
