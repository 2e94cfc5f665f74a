use std::fmt::Display;

/// Defines the builtin function identifiers and their name tables.
///
/// Each entry maps a source-level name to an enum variant. The macro produces:
/// - `UnaryFunction` and `BinaryFunction`, one variant per entry,
/// - `from_name` and `name` on both enums,
/// - `BUILTIN_FUNCTIONS` (public list of every builtin name).
macro_rules! builtin_functions {
    (
        unary {
            $($uname:literal => $uvariant:ident),* $(,)?
        }
        binary {
            $($bname:literal => $bvariant:ident),* $(,)?
        }
    ) => {
        /// Builtins taking exactly one argument.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum UnaryFunction {
            $(
                #[doc = concat!("`", $uname, "(x)`")]
                $uvariant,
            )*
        }

        /// Builtins taking exactly two arguments.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum BinaryFunction {
            $(
                #[doc = concat!("`", $bname, "(x, y)`")]
                $bvariant,
            )*
        }

        impl UnaryFunction {
            /// Looks up a one-argument builtin by its exact, case-sensitive
            /// name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($uname => Some(Self::$uvariant),)*
                    _ => None,
                }
            }

            /// The name this builtin is called by.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$uvariant => $uname,)*
                }
            }
        }

        impl BinaryFunction {
            /// Looks up a two-argument builtin by its exact, case-sensitive
            /// name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($bname => Some(Self::$bvariant),)*
                    _ => None,
                }
            }

            /// The name this builtin is called by.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$bvariant => $bname,)*
                }
            }
        }

        /// Every builtin function name, one-argument builtins first.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($uname,)*
            $($bname,)*
        ];
    };
}

builtin_functions! {
    unary {
        "sin"       => Sin,
        "cos"       => Cos,
        "tan"       => Tan,
        "sec"       => Sec,
        "csc"       => Csc,
        "cot"       => Cot,
        "asin"      => Asin,
        "acos"      => Acos,
        "atan"      => Atan,
        "asec"      => Asec,
        "acsc"      => Acsc,
        "acot"      => Acot,
        "sinh"      => Sinh,
        "cosh"      => Cosh,
        "tanh"      => Tanh,
        "sech"      => Sech,
        "csch"      => Csch,
        "coth"      => Coth,
        "asinh"     => Asinh,
        "acosh"     => Acosh,
        "atanh"     => Atanh,
        "log"       => Log,
        "ln"        => Ln,
        "log10"     => Log10,
        "log2"      => Log2,
        "exp"       => Exp,
        "exp10"     => Exp10,
        "exp2"      => Exp2,
        "sqrt"      => Sqrt,
        "cbrt"      => Cbrt,
        "abs"       => Abs,
        "floor"     => Floor,
        "ceil"      => Ceil,
        "round"     => Round,
        "factorial" => Factorial,
        "gamma"     => Gamma,
    }
    binary {
        "pow"   => Pow,
        "nthrt" => Nthrt,
        "mod"   => Mod,
        "logb"  => Logb,
        "atan2" => Atan2,
        "perm"  => Perm,
        "comb"  => Comb,
        "gcd"   => Gcd,
        "lcm"   => Lcm,
        "min"   => Min,
        "max"   => Max,
    }
}

/// A builtin function identifier, resolved once by the lexer.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::builtin::{BinaryFunction, Function};
///
/// assert_eq!(Function::from_name("gcd"), Some(Function::Binary(BinaryFunction::Gcd)));
/// assert_eq!(Function::from_name("Sin"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// A one-argument builtin.
    Unary(UnaryFunction),
    /// A two-argument builtin.
    Binary(BinaryFunction),
}

impl Function {
    /// Resolves a function name against both builtin tables.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        UnaryFunction::from_name(name).map(Self::Unary)
                                      .or_else(|| BinaryFunction::from_name(name).map(Self::Binary))
    }

    /// The name this function is called by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unary(f) => f.name(),
            Self::Binary(f) => f.name(),
        }
    }

    /// The exact number of arguments this function accepts.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
