use std::fmt;

/// A named KVM request and the code it resolves to on this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IoctlDescriptor {
    pub name: &'static str,
    pub code: u64,
}

impl IoctlDescriptor {
    pub fn new(name: &'static str, code: u64) -> Self {
        Self {
            name,
            code,
        }
    }
}

/// The fd a request is issued on. Only used to group the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeGroup {
    System,
    Vm,
    Vcpu,
}

impl ScopeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ScopeGroup::System => "System IOCTLs:",
            ScopeGroup::Vm => "VM IOCTLs:",
            ScopeGroup::Vcpu => "VCPU IOCTLs:",
        }
    }
}

impl fmt::Display for ScopeGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ScopeGroup::System => "system",
            ScopeGroup::Vm => "vm",
            ScopeGroup::Vcpu => "vcpu",
        };

        write!(f, "{}", name)
    }
}
