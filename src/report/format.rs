use std::io::{self, Write};
use std::mem;

use crate::report::catalog::Catalog;
use crate::report::descriptor::IoctlDescriptor;

pub const DEFAULT_NAME_WIDTH: usize = 30;
const HEADER_INDENT: &str = "  ";

/// Minimum number of hex digits printed for a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueWidth {
    U32,
    /* Width of the platform unsigned long */
    Long,
}

impl ValueWidth {
    pub fn digits(&self) -> usize {
        match self {
            ValueWidth::U32 => mem::size_of::<u32>() * 2,
            ValueWidth::Long => mem::size_of::<libc::c_ulong>() * 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatStyle {
    pub headers: bool,
    /* None prints the name unpadded */
    pub name_width: Option<usize>,
    pub value_width: ValueWidth,
}

impl FormatStyle {
    pub fn new(headers: bool, name_width: Option<usize>,
               value_width: ValueWidth) -> Self {
        Self {
            headers,
            name_width,
            value_width,
        }
    }

    /// One descriptor line, without the trailing newline.
    pub fn format_line(&self, desc: &IoctlDescriptor) -> String {
        let indent = if self.headers { HEADER_INDENT } else { "" };
        let digits = self.value_width.digits();

        /* The digit count is a minimum, wider codes are never truncated */
        match self.name_width {
            Some(width) => format!("{}{:<width$} = 0x{:0digits$X}",
                                   indent, desc.name, desc.code,
                                   width = width, digits = digits),
            None => format!("{}{} = 0x{:0digits$X}",
                            indent, desc.name, desc.code, digits = digits),
        }
    }
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self::new(true, Some(DEFAULT_NAME_WIDTH), ValueWidth::U32)
    }
}

pub fn render<W: Write>(catalog: &Catalog, style: &FormatStyle,
                        out: &mut W) -> io::Result<()> {
    for (scope, descriptors) in catalog.groups() {
        if style.headers {
            writeln!(out, "{}", scope.label())?;
        }

        for desc in descriptors {
            writeln!(out, "{}", style.format_line(desc))?;
        }
    }

    Ok(())
}

pub fn render_to_string(catalog: &Catalog, style: &FormatStyle) -> String {
    let mut buf: Vec<u8> = Vec::new();

    /* Writing into a Vec cannot fail */
    if render(catalog, style, &mut buf).is_err() {
        return String::new();
    }

    String::from_utf8_lossy(&buf).into_owned()
}
