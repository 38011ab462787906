use crate::plat::kvm::ioctl::*;
use crate::report::descriptor::{IoctlDescriptor, ScopeGroup};

/*
 * Name and code come from the same identifier, so an entry for a request
 * the platform does not define fails to build.
 */
macro_rules! ioctl_list {
    ($($req:ident),* $(,)?) => {
        vec![$(IoctlDescriptor::new(stringify!($req), $req() as u64)),*]
    };
}

/// Which curated list to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogRevision {
    /* Sixteen requests a minimal x86 VMM needs */
    Classic,
    /* Classic plus memory regions, debug registers and guest debug */
    Extended,
}

/// Ordered scope groups, each with its ordered descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<(ScopeGroup, Vec<IoctlDescriptor>)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, scope: ScopeGroup,
                      descriptors: Vec<IoctlDescriptor>) -> Self {
        self.groups.push((scope, descriptors));
        self
    }

    pub fn for_revision(revision: CatalogRevision) -> Self {
        match revision {
            CatalogRevision::Classic => Self::classic(),
            CatalogRevision::Extended => Self::extended(),
        }
    }

    fn classic() -> Self {
        Catalog::new()
            .with_group(ScopeGroup::System, ioctl_list![
                KVM_GET_API_VERSION,
                KVM_CREATE_VM,
                KVM_GET_MSR_INDEX_LIST,
                KVM_CHECK_EXTENSION,
                KVM_GET_VCPU_MMAP_SIZE,
            ])
            .with_group(ScopeGroup::Vm, ioctl_list![
                KVM_CREATE_VCPU,
            ])
            .with_group(ScopeGroup::Vcpu, ioctl_list![
                KVM_RUN,
                KVM_GET_REGS,
                KVM_SET_REGS,
                KVM_GET_SREGS,
                KVM_SET_SREGS,
                KVM_TRANSLATE,
                KVM_INTERRUPT,
                KVM_GET_MSRS,
                KVM_SET_MSRS,
                KVM_SET_CPUID,
            ])
    }

    fn extended() -> Self {
        Catalog::new()
            .with_group(ScopeGroup::System, ioctl_list![
                KVM_GET_API_VERSION,
                KVM_CREATE_VM,
                KVM_GET_MSR_INDEX_LIST,
                KVM_CHECK_EXTENSION,
                KVM_GET_VCPU_MMAP_SIZE,
            ])
            .with_group(ScopeGroup::Vm, ioctl_list![
                KVM_CREATE_VCPU,
                KVM_SET_USER_MEMORY_REGION,
            ])
            .with_group(ScopeGroup::Vcpu, ioctl_list![
                KVM_RUN,
                KVM_GET_REGS,
                KVM_SET_REGS,
                KVM_GET_SREGS,
                KVM_SET_SREGS,
                KVM_GET_DEBUGREGS,
                KVM_SET_DEBUGREGS,
                KVM_TRANSLATE,
                KVM_INTERRUPT,
                KVM_GET_MSRS,
                KVM_SET_MSRS,
                KVM_SET_CPUID,
                KVM_SET_GUEST_DEBUG,
            ])
    }

    pub fn groups(&self) -> &[(ScopeGroup, Vec<IoctlDescriptor>)] {
        &self.groups
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &IoctlDescriptor> {
        self.groups.iter().flat_map(|(_, descs)| descs.iter())
    }

    pub fn len(&self) -> usize {
        self.descriptors().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, name: &str) -> Option<&IoctlDescriptor> {
        self.descriptors().find(|desc| desc.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
