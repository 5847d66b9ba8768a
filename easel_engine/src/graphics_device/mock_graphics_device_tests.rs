//! Unit tests for the mock graphics device
//!
//! Verifies the counters and event log that the target-cache and panel
//! tests rely on.

use crate::graphics_device::{
    GraphicsDevice, TextureDesc, TextureFormat, TextureUsage,
    BufferDesc, BufferUsage, ShaderDesc, ShaderStage,
};
use crate::graphics_device::mock_graphics_device::MockGraphicsDevice;
use crate::error::Error;

#[test]
fn test_texture_creation_counts_storage() {
    let mut device = MockGraphicsDevice::new();
    let counters = device.counters();

    let tex = device
        .create_texture(TextureDesc {
            width: 64,
            height: 64,
            format: TextureFormat::R8G8B8A8_UNORM,
            usage: TextureUsage::SampledAndRenderTarget,
        })
        .unwrap();

    assert_eq!(counters.textures_created.get(), 1);
    assert_eq!(counters.storage_allocations.get(), 1);
    assert_eq!(counters.reallocations.get(), 0);
    assert_eq!(tex.info().width, 64);
}

#[test]
fn test_reallocate_counts_and_resizes() {
    let mut device = MockGraphicsDevice::new();
    let counters = device.counters();

    let tex = device
        .create_texture(TextureDesc {
            width: 64,
            height: 64,
            format: TextureFormat::R8G8B8A8_UNORM,
            usage: TextureUsage::SampledAndRenderTarget,
        })
        .unwrap();

    tex.reallocate(256, 256).unwrap();

    assert_eq!(counters.textures_created.get(), 1);
    assert_eq!(counters.storage_allocations.get(), 2);
    assert_eq!(counters.reallocations.get(), 1);
    assert_eq!(tex.info().width, 256);
    assert_eq!(tex.info().height, 256);
}

#[test]
fn test_display_image_only_for_color() {
    let mut device = MockGraphicsDevice::new();

    let color = device
        .create_texture(TextureDesc {
            width: 32,
            height: 32,
            format: TextureFormat::R8G8B8A8_UNORM,
            usage: TextureUsage::SampledAndRenderTarget,
        })
        .unwrap();
    let depth = device
        .create_texture(TextureDesc {
            width: 32,
            height: 32,
            format: TextureFormat::D24_UNORM_S8_UINT,
            usage: TextureUsage::DepthStencil,
        })
        .unwrap();

    assert!(color.display_image().is_some());
    assert!(depth.display_image().is_none());
}

#[test]
fn test_display_image_ids_are_distinct() {
    let mut device = MockGraphicsDevice::new();
    let desc = TextureDesc {
        width: 32,
        height: 32,
        format: TextureFormat::R8G8B8A8_UNORM,
        usage: TextureUsage::Sampled,
    };

    let a = device.create_texture(desc.clone()).unwrap();
    let b = device.create_texture(desc).unwrap();

    assert_ne!(a.display_image().unwrap(), b.display_image().unwrap());
}

#[test]
fn test_buffer_update_bounds_check() {
    let mut device = MockGraphicsDevice::new();
    let buffer = device
        .create_buffer(BufferDesc {
            size: 16,
            usage: BufferUsage::Vertex,
        })
        .unwrap();

    assert!(buffer.update(0, &[0u8; 16]).is_ok());
    assert!(buffer.update(8, &[0u8; 16]).is_err());
}

#[test]
fn test_command_list_records_into_device_events() {
    let mut device = MockGraphicsDevice::new();
    let mut cmd = device.create_command_list().unwrap();

    cmd.begin().unwrap();
    cmd.end().unwrap();
    device.submit(&[cmd.as_ref()]).unwrap();

    assert_eq!(device.events(), vec!["begin", "end", "submit"]);
}

#[test]
fn test_injected_texture_failure() {
    let mut device = MockGraphicsDevice::new();
    device.fail_textures.set(true);

    let result = device.create_texture(TextureDesc {
        width: 64,
        height: 64,
        format: TextureFormat::R8G8B8A8_UNORM,
        usage: TextureUsage::SampledAndRenderTarget,
    });

    assert!(matches!(result, Err(Error::BackendError(_))));
    assert_eq!(device.counters().textures_created.get(), 0);
}

#[test]
fn test_injected_shader_failure() {
    let mut device = MockGraphicsDevice::new();
    device.fail_shaders.set(true);

    let result = device.create_shader(ShaderDesc {
        source: "void main() {}",
        stage: ShaderStage::Vertex,
    });

    assert!(matches!(result, Err(Error::BackendError(_))));
}
