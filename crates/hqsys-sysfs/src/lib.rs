//! sysfs wiring for the Huaqin hardware-info driver
//!
//! Publishes the resolved PCBA name as a read-only attribute:
//!
//! ```text
//! /sys/class/huaqin/interface/hw_info/pcba_config
//! ```
//!
//! The host's object model (classes, devices, kobjects, attribute groups)
//! sits behind the `SysfsHost` trait so the wiring and its unwind order can
//! be exercised without a kernel.

#![no_std]

extern crate alloc;

mod interface;

pub use interface::HwInfoInterface;

use core::fmt;

/// Class the device is created under
pub const CLASS_NAME: &str = "huaqin";
/// Device node name
pub const DEVICE_NAME: &str = "interface";
/// Object holding the attribute group
pub const HW_INFO_NAME: &str = "hw_info";

/// Read-only attribute carrying the PCBA name
pub const PCBA_CONFIG_ATTR: Attribute = Attribute::read_only("pcba_config");

/// Attribute group registered on `hw_info`
pub static HW_INFO_GROUP: AttributeGroup = AttributeGroup {
    name: None,
    attrs: &[PCBA_CONFIG_ATTR],
};

/// Handle to a created class
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassHandle(pub u64);

/// Handle to a created device
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceHandle(pub u64);

/// Handle to a created kobject
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KobjHandle(pub u64);

/// A sysfs attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    /// Permission bits
    pub mode: u16,
}

impl Attribute {
    pub const fn read_only(name: &'static str) -> Self {
        Self { name, mode: 0o444 }
    }

    pub const fn is_writable(&self) -> bool {
        self.mode & 0o222 != 0
    }
}

/// A set of attributes created and removed together
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeGroup {
    /// Subdirectory name, or `None` to place attributes in the object itself
    pub name: Option<&'static str>,
    pub attrs: &'static [Attribute],
}

impl AttributeGroup {
    pub fn find(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|attr| attr.name == name)
    }
}

/// Host object-model trait
///
/// Teardown operations cannot fail; creation reports `HostError`.
pub trait SysfsHost: Send + Sync {
    fn class_create(&self, name: &str) -> Result<ClassHandle, HostError>;

    fn class_destroy(&self, class: ClassHandle);

    fn device_create(&self, class: ClassHandle, name: &str) -> Result<DeviceHandle, HostError>;

    fn device_destroy(&self, class: ClassHandle, device: DeviceHandle);

    /// Create a kobject named `name` under `parent`
    fn kobject_create_and_add(&self, name: &str, parent: DeviceHandle)
        -> Result<KobjHandle, HostError>;

    /// Drop the last reference to a kobject
    fn kobject_put(&self, kobj: KobjHandle);

    fn sysfs_create_group(&self, kobj: KobjHandle, group: &AttributeGroup) -> Result<(), HostError>;

    fn sysfs_remove_group(&self, kobj: KobjHandle, group: &AttributeGroup);

    /// Write a diagnostic message to the host log
    fn debug_write(&self, msg: &str);
}

impl<H: SysfsHost> SysfsHost for alloc::sync::Arc<H> {
    fn class_create(&self, name: &str) -> Result<ClassHandle, HostError> {
        (**self).class_create(name)
    }

    fn class_destroy(&self, class: ClassHandle) {
        (**self).class_destroy(class)
    }

    fn device_create(&self, class: ClassHandle, name: &str) -> Result<DeviceHandle, HostError> {
        (**self).device_create(class, name)
    }

    fn device_destroy(&self, class: ClassHandle, device: DeviceHandle) {
        (**self).device_destroy(class, device)
    }

    fn kobject_create_and_add(
        &self,
        name: &str,
        parent: DeviceHandle,
    ) -> Result<KobjHandle, HostError> {
        (**self).kobject_create_and_add(name, parent)
    }

    fn kobject_put(&self, kobj: KobjHandle) {
        (**self).kobject_put(kobj)
    }

    fn sysfs_create_group(&self, kobj: KobjHandle, group: &AttributeGroup) -> Result<(), HostError> {
        (**self).sysfs_create_group(kobj, group)
    }

    fn sysfs_remove_group(&self, kobj: KobjHandle, group: &AttributeGroup) {
        (**self).sysfs_remove_group(kobj, group)
    }

    fn debug_write(&self, msg: &str) {
        (**self).debug_write(msg)
    }
}

/// Host registration errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostError {
    /// Allocation failed (`-ENOMEM`)
    OutOfMemory,
    /// Name already taken (`-EEXIST`)
    AlreadyExists,
    /// No such object or attribute (`-ENOENT`)
    NotFound,
    /// Any other host failure, with its errno
    Io(i32),
}

impl HostError {
    /// Negative errno, as an init routine would return it
    pub fn errno(&self) -> i32 {
        match self {
            HostError::OutOfMemory => -12,
            HostError::AlreadyExists => -17,
            HostError::NotFound => -2,
            HostError::Io(errno) => -errno.abs(),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::OutOfMemory => write!(f, "out of memory"),
            HostError::AlreadyExists => write!(f, "already exists"),
            HostError::NotFound => write!(f, "not found"),
            HostError::Io(errno) => write!(f, "host error {}", errno),
        }
    }
}
