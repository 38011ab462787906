#[macro_use]
extern crate clap;
#[macro_use]
extern crate vmm_sys_util;

#[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
compile_error!("ioctl_dump resolves the x86_64 Linux KVM request codes only");

pub mod debug;
pub mod init;
pub mod plat;
pub mod report;

#[cfg(test)]
pub mod test;

use std::io::{self, Write};
use log::{debug, info};

use init::cmdline;
use report::format;
use report::profile::{self, Profile};

pub fn list_profiles<W: Write>(out: &mut W) -> io::Result<()> {
    for p in profile::profiles() {
        writeln!(out, "{:<10} {}", p.name, p.about)?;
    }

    Ok(())
}

pub fn dump<W: Write>(profile: &Profile, out: &mut W) -> io::Result<()> {
    let catalog = profile.catalog();

    for (scope, descriptors) in catalog.groups() {
        debug!("{} group: {} requests", scope, descriptors.len());
    }

    format::render(&catalog, &profile.style, out)
}

pub fn run(config: &cmdline::DumpConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if config.list_profiles {
        list_profiles(&mut out)?;
        return out.flush();
    }

    let selected = config.resolve_profile();
    info!("profile {} ({:?}), wide {}, headers {}", selected.name,
          selected.revision, config.wide, selected.style.headers);

    dump(&selected, &mut out)?;
    out.flush()
}
