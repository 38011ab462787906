pub mod reportest {
    use crate::report::catalog::Catalog;
    use crate::report::descriptor::{IoctlDescriptor, ScopeGroup};

    pub const CLASSIC_OUTPUT: &str = "\
System IOCTLs:
  KVM_GET_API_VERSION            = 0x0000AE00
  KVM_CREATE_VM                  = 0x0000AE01
  KVM_GET_MSR_INDEX_LIST         = 0xC004AE02
  KVM_CHECK_EXTENSION            = 0x0000AE03
  KVM_GET_VCPU_MMAP_SIZE         = 0x0000AE04
VM IOCTLs:
  KVM_CREATE_VCPU                = 0x0000AE41
VCPU IOCTLs:
  KVM_RUN                        = 0x0000AE80
  KVM_GET_REGS                   = 0x8090AE81
  KVM_SET_REGS                   = 0x4090AE82
  KVM_GET_SREGS                  = 0x8138AE83
  KVM_SET_SREGS                  = 0x4138AE84
  KVM_TRANSLATE                  = 0xC018AE85
  KVM_INTERRUPT                  = 0x4004AE86
  KVM_GET_MSRS                   = 0xC008AE88
  KVM_SET_MSRS                   = 0x4008AE89
  KVM_SET_CPUID                  = 0x4008AE8A
";

    pub fn small_catalog_create() -> Catalog {
        Catalog::new()
            .with_group(ScopeGroup::System, vec![
                IoctlDescriptor::new("A", 0x01),
                IoctlDescriptor::new("B", 0x02),
            ])
            .with_group(ScopeGroup::Vm, vec![
                IoctlDescriptor::new("C", 0x03),
            ])
    }
}
