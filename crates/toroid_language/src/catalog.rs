//! The instruction catalog.
//!
//! Every cell value from 0 to 255 has exactly one immutable [`Instruction`]
//! descriptor. Values outside that range share a single "unknown"
//! descriptor, which reflects. The catalog is built once per process and
//! shared by reference across every IP and every interpreter.

use std::fmt;
use std::sync::LazyLock;

use toroid_foundation::{Dialect, Value};

/// Display grouping for an instruction. Diagnostics only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// `+ - * / % !`
    Arithmetic,
    /// `` ` `` and `w`
    Comparison,
    /// Direction changes, branches, jumps, and termination.
    Flow,
    /// `: \ $ n`
    Stack,
    /// `{ } u`
    StackStack,
    /// `g p ' s`
    Space,
    /// Character, number, and file I/O.
    Io,
    /// `t`
    Concurrency,
    /// `y` and `=`
    System,
    /// `0-9 a-f` and `"`
    Literal,
    /// `( )` and `A-Z`
    Fingerprint,
    /// Cells that do nothing when executed.
    Nop,
    /// Cells with no defined meaning.
    Unknown,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arithmetic => "arithmetic",
            Self::Comparison => "comparison",
            Self::Flow => "flow",
            Self::Stack => "stack",
            Self::StackStack => "stack-stack",
            Self::Space => "space",
            Self::Io => "io",
            Self::Concurrency => "concurrency",
            Self::System => "system",
            Self::Literal => "literal",
            Self::Fingerprint => "fingerprint",
            Self::Nop => "nop",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The operation an instruction performs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    // === Literals ===
    /// Push a constant: `[] -> [n]`
    Push(Value),
    /// Toggle string mode.
    StringMode,
    /// Push the next cell and skip over it.
    FetchChar,
    /// Pop a value into the next cell and skip over it.
    StoreChar,

    // === Arithmetic ===
    /// `[a, b] -> [a + b]`
    Add,
    /// `[a, b] -> [a - b]`
    Sub,
    /// `[a, b] -> [a * b]`
    Mul,
    /// `[a, b] -> [a / b]`, zero divisor gives 0
    Div,
    /// `[a, b] -> [a % b]`, zero divisor gives 0
    Rem,
    /// `[a] -> [a == 0]`
    Not,
    /// `[a, b] -> [a > b]`
    Greater,

    // === Flow ===
    /// Set delta to a cardinal direction.
    Go(Direction),
    /// Pick a random cardinal delta.
    GoAway,
    /// Rotate delta a quarter turn left.
    TurnLeft,
    /// Rotate delta a quarter turn right.
    TurnRight,
    /// Reverse delta.
    Reflect,
    /// Pop; east if zero, else west.
    HorizontalIf,
    /// Pop; south if zero, else north.
    VerticalIf,
    /// Pop `b, a`; turn left if `a < b`, right if `a > b`.
    Compare,
    /// Pop a vector and make it the delta.
    AbsoluteDelta,
    /// Skip the next cell.
    Trampoline,
    /// Comment delimiter; consumed while resolving the next instruction.
    JumpOver,
    /// Pop `n`; move `n` cells along delta.
    Jump,
    /// Pop `n`; execute the next instruction `n` times.
    Iterate,
    /// Stop this IP.
    Stop,
    /// Pop a code and end the whole run.
    Quit,

    // === Stack ===
    /// `[a] -> [a, a]`
    Duplicate,
    /// `[a, b] -> [b, a]`
    Swap,
    /// `[a] -> []`
    Discard,
    /// Empty the TOSS.
    Clear,

    // === Stack-stack ===
    /// Open a block (`{`).
    BeginBlock,
    /// Close a block (`}`).
    EndBlock,
    /// Move cells between SOSS and TOSS (`u`).
    StackUnder,

    // === Space ===
    /// Pop a vector; push the cell at storage offset plus vector.
    Get,
    /// Pop a vector and a value; write the value there.
    Put,

    // === I/O ===
    /// Pop and output a character.
    OutputChar,
    /// Pop and output a decimal number.
    OutputNumber,
    /// Read a character.
    InputChar,
    /// Read a decimal number.
    InputNumber,
    /// Load a file into FungeSpace.
    FileInput,
    /// Write a FungeSpace region to a file.
    FileOutput,

    // === Concurrency ===
    /// Fork a child IP.
    Split,

    // === System ===
    /// Push system information.
    SysInfo,
    /// Execute a host command. No paradigm is offered, so this reflects.
    Execute,

    // === Fingerprints ===
    /// Load a fingerprint.
    LoadSemantics,
    /// Unload a fingerprint.
    UnloadSemantics,
    /// A letter `A`–`Z`, resolved through the loaded fingerprints.
    Letter(u8),

    // === No-ops ===
    /// Does nothing (`z` and space).
    Nop,
    /// Three-dimensional instruction; meaningless in a 2D space.
    ThreeD,
    /// No defined meaning.
    Unknown,
}

/// A cardinal direction set by `> < ^ v`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `>`
    East,
    /// `<`
    West,
    /// `^`
    North,
    /// `v`
    South,
}

/// An immutable instruction descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The character this descriptor is bound to.
    pub glyph: char,
    /// Short human-readable name.
    pub name: &'static str,
    /// Display grouping.
    pub category: Category,
    /// Cells padded onto the TOSS bottom before the operation runs.
    pub min_stack: usize,
    /// The dialect that introduced this instruction.
    pub since: Dialect,
    /// The operation to dispatch.
    pub op: Op,
}

impl Instruction {
    /// Returns true if this instruction exists under `dialect`.
    #[must_use]
    pub fn available_in(&self, dialect: Dialect) -> bool {
        dialect.supports(self.since)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {} ({})", self.glyph, self.name, self.category)
    }
}

/// The full table of 256 descriptors.
pub struct Catalog {
    table: Vec<Instruction>,
    unknown: Instruction,
}

impl Catalog {
    fn build() -> Self {
        let table = (0u8..=255).map(describe).collect();
        Self {
            table,
            unknown: unknown('\u{FFFD}'),
        }
    }

    /// Looks up the descriptor for a cell value.
    #[must_use]
    pub fn get(&self, value: Value) -> &Instruction {
        usize::try_from(value)
            .ok()
            .and_then(|i| self.table.get(i))
            .unwrap_or(&self.unknown)
    }

    /// Iterates the 256 table entries in value order.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.table.iter()
    }

    /// Number of table entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; the table is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog").field("entries", &self.table.len()).finish()
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Returns the process-wide catalog.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Looks up the descriptor for a cell value in the process-wide catalog.
#[must_use]
pub fn lookup(value: Value) -> &'static Instruction {
    CATALOG.get(value)
}

fn entry(
    glyph: char,
    name: &'static str,
    category: Category,
    min_stack: usize,
    since: Dialect,
    op: Op,
) -> Instruction {
    Instruction {
        glyph,
        name,
        category,
        min_stack,
        since,
        op,
    }
}

fn unknown(glyph: char) -> Instruction {
    entry(glyph, "unknown", Category::Unknown, 0, Dialect::Befunge93, Op::Unknown)
}

fn describe(byte: u8) -> Instruction {
    use Category as C;
    use Dialect::{Befunge93 as B93, Funge98 as F98};

    let glyph = char::from(byte);
    let e = |name, category, min_stack, since, op| entry(glyph, name, category, min_stack, since, op);

    match byte {
        b'0'..=b'9' => e("push digit", C::Literal, 0, B93, Op::Push(Value::from(byte - b'0'))),
        b'a'..=b'f' => e("push hex digit", C::Literal, 0, F98, Op::Push(Value::from(byte - b'a' + 10))),
        b'"' => e("string mode", C::Literal, 0, B93, Op::StringMode),
        b'\'' => e("fetch character", C::Literal, 0, F98, Op::FetchChar),
        b's' => e("store character", C::Space, 1, F98, Op::StoreChar),

        b'+' => e("add", C::Arithmetic, 2, B93, Op::Add),
        b'-' => e("subtract", C::Arithmetic, 2, B93, Op::Sub),
        b'*' => e("multiply", C::Arithmetic, 2, B93, Op::Mul),
        b'/' => e("divide", C::Arithmetic, 2, B93, Op::Div),
        b'%' => e("remainder", C::Arithmetic, 2, B93, Op::Rem),
        b'!' => e("logical not", C::Arithmetic, 1, B93, Op::Not),
        b'`' => e("greater than", C::Comparison, 2, B93, Op::Greater),
        b'w' => e("compare", C::Comparison, 2, F98, Op::Compare),

        b'>' => e("go east", C::Flow, 0, B93, Op::Go(Direction::East)),
        b'<' => e("go west", C::Flow, 0, B93, Op::Go(Direction::West)),
        b'^' => e("go north", C::Flow, 0, B93, Op::Go(Direction::North)),
        b'v' => e("go south", C::Flow, 0, B93, Op::Go(Direction::South)),
        b'?' => e("go away", C::Flow, 0, B93, Op::GoAway),
        b'[' => e("turn left", C::Flow, 0, F98, Op::TurnLeft),
        b']' => e("turn right", C::Flow, 0, F98, Op::TurnRight),
        b'r' => e("reflect", C::Flow, 0, F98, Op::Reflect),
        b'_' => e("east-west if", C::Flow, 1, B93, Op::HorizontalIf),
        b'|' => e("north-south if", C::Flow, 1, B93, Op::VerticalIf),
        b'x' => e("absolute delta", C::Flow, 2, F98, Op::AbsoluteDelta),
        b'#' => e("trampoline", C::Flow, 0, B93, Op::Trampoline),
        b';' => e("jump over", C::Flow, 0, F98, Op::JumpOver),
        b'j' => e("jump forward", C::Flow, 1, F98, Op::Jump),
        b'k' => e("iterate", C::Flow, 1, F98, Op::Iterate),
        b'@' => e("stop", C::Flow, 0, B93, Op::Stop),
        b'q' => e("quit", C::Flow, 1, F98, Op::Quit),

        b':' => e("duplicate", C::Stack, 1, B93, Op::Duplicate),
        b'\\' => e("swap", C::Stack, 2, B93, Op::Swap),
        b'$' => e("pop", C::Stack, 1, B93, Op::Discard),
        b'n' => e("clear stack", C::Stack, 0, F98, Op::Clear),

        b'{' => e("begin block", C::StackStack, 1, F98, Op::BeginBlock),
        b'}' => e("end block", C::StackStack, 1, F98, Op::EndBlock),
        b'u' => e("stack under stack", C::StackStack, 1, F98, Op::StackUnder),

        b'g' => e("get", C::Space, 2, B93, Op::Get),
        b'p' => e("put", C::Space, 3, B93, Op::Put),

        b',' => e("output character", C::Io, 1, B93, Op::OutputChar),
        b'.' => e("output integer", C::Io, 1, B93, Op::OutputNumber),
        b'~' => e("input character", C::Io, 0, B93, Op::InputChar),
        b'&' => e("input integer", C::Io, 0, B93, Op::InputNumber),
        b'i' => e("input file", C::Io, 0, F98, Op::FileInput),
        b'o' => e("output file", C::Io, 0, F98, Op::FileOutput),

        b't' => e("split", C::Concurrency, 0, F98, Op::Split),

        b'y' => e("get sysinfo", C::System, 1, F98, Op::SysInfo),
        b'=' => e("execute", C::System, 0, F98, Op::Execute),

        b'(' => e("load semantics", C::Fingerprint, 1, F98, Op::LoadSemantics),
        b')' => e("unload semantics", C::Fingerprint, 1, F98, Op::UnloadSemantics),
        b'A'..=b'Z' => e("fingerprint letter", C::Fingerprint, 0, F98, Op::Letter(byte - b'A')),

        b' ' => e("space", C::Nop, 0, B93, Op::Nop),
        b'z' => e("no-op", C::Nop, 0, F98, Op::Nop),
        b'h' | b'l' | b'm' => e("three-dimensional", C::Flow, 0, F98, Op::ThreeD),

        _ => unknown(glyph),
    }
}
