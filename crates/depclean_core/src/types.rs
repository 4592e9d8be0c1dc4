#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specifier {
    pub request: String,
    pub kind: SpecKind,
}

/// Source syntax a specifier was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecKind {
    /// `require('x')`
    Require,
    /// `require.ensure('x')`
    RequireEnsure,
    /// `require.resolve('x')`
    RequireResolve,
    /// `System.import('x')`
    SystemImport,
    /// `... from 'x'`
    ImportFrom,
    /// `import 'x';`
    SideEffectImport,
    /// `import('x')`, but not `foo.import('x')`
    DynamicImport,
    /// `/// <reference types="x" />`
    ReferenceTypes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}
