//! `hw_info` interface lifecycle
//!
//! Registration order is class -> device -> kobject -> group. A failure at
//! any step undoes the completed steps in reverse before the error is
//! returned, so a failed init leaves nothing behind.

use alloc::format;
use alloc::string::String;
use hqsys_pcba::PcbaService;
use hqsys_smem::Smem;

use crate::{
    ClassHandle, DeviceHandle, HostError, KobjHandle, SysfsHost, CLASS_NAME, DEVICE_NAME,
    HW_INFO_GROUP, HW_INFO_NAME, PCBA_CONFIG_ATTR,
};

const LOG_TAG: &str = "[hw_info]";

/// Registered `huaqin/interface/hw_info` node and the service behind it
pub struct HwInfoInterface<H: SysfsHost, S: Smem> {
    host: H,
    service: PcbaService<S>,
    class: ClassHandle,
    device: DeviceHandle,
    kobj: KobjHandle,
}

impl<H: SysfsHost, S: Smem> HwInfoInterface<H, S> {
    /// Pre-warm the PCBA cache ahead of registration.
    ///
    /// Runs at subsystem-init time, before the attribute exists.
    pub fn early_init(service: &PcbaService<S>) {
        service.early_init();
    }

    /// Create the class, device, object and attribute group.
    pub fn init(host: H, service: PcbaService<S>) -> Result<Self, HostError> {
        let class = host
            .class_create(CLASS_NAME)
            .map_err(|e| Self::init_failed(&host, "class_create", e))?;

        let device = match host.device_create(class, DEVICE_NAME) {
            Ok(device) => device,
            Err(e) => {
                host.class_destroy(class);
                return Err(Self::init_failed(&host, "device_create", e));
            }
        };

        let kobj = match host.kobject_create_and_add(HW_INFO_NAME, device) {
            Ok(kobj) => kobj,
            Err(e) => {
                host.device_destroy(class, device);
                host.class_destroy(class);
                return Err(Self::init_failed(&host, "kobject_create_and_add", e));
            }
        };

        if let Err(e) = host.sysfs_create_group(kobj, &HW_INFO_GROUP) {
            host.kobject_put(kobj);
            host.device_destroy(class, device);
            host.class_destroy(class);
            return Err(Self::init_failed(&host, "sysfs_create_group", e));
        }

        host.debug_write(&format!("{} registered {}", LOG_TAG, Self::sysfs_path()));

        Ok(Self {
            host,
            service,
            class,
            device,
            kobj,
        })
    }

    /// Remove the attribute group and release every object, in reverse.
    pub fn exit(self) -> (H, PcbaService<S>) {
        self.host.sysfs_remove_group(self.kobj, &HW_INFO_GROUP);
        self.host.kobject_put(self.kobj);
        self.host.device_destroy(self.class, self.device);
        self.host.class_destroy(self.class);
        self.host
            .debug_write(&format!("{} removed {}", LOG_TAG, Self::sysfs_path()));
        (self.host, self.service)
    }

    /// Read an attribute of the group.
    pub fn read_attribute(&self, name: &str) -> Result<String, HostError> {
        match HW_INFO_GROUP.find(name) {
            Some(attr) if attr.name == PCBA_CONFIG_ATTR.name => Ok(self.service.show()),
            _ => Err(HostError::NotFound),
        }
    }

    /// `pcba_config` show handler
    pub fn pcba_config_show(&self) -> String {
        self.service.show()
    }

    pub fn sysfs_path() -> String {
        format!("/sys/class/{}/{}/{}", CLASS_NAME, DEVICE_NAME, HW_INFO_NAME)
    }

    pub fn service(&self) -> &PcbaService<S> {
        &self.service
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn init_failed(host: &H, step: &str, e: HostError) -> HostError {
        host.debug_write(&format!("{} {} failed: {}", LOG_TAG, step, e));
        e
    }
}
