extern crate vk_registry;

use vk_registry::*;

const VK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <comment>Copyright 2015-2024 The Khronos Group Inc.</comment>
    <platforms comment="Vulkan platform names, reserved for use with platform- and window system-specific extensions">
        <platform name="xlib" protect="VK_USE_PLATFORM_XLIB_KHR" comment="X Window System, Xlib client library"/>
        <platform name="wayland" protect="VK_USE_PLATFORM_WAYLAND_KHR" comment="Wayland display server protocol"/>
    </platforms>
    <tags comment="Vulkan vendor/author tags for extensions and layers">
        <tag name="KHR" author="Khronos" contact="Tom Olson @tomolson"/>
        <tag name="EXT" author="Multivendor" contact="Jon Leech @oddhack"/>
    </tags>
    <types comment="Vulkan type definitions">
        <type name="vk_platform" category="include">#include "vk_platform.h"</type>
        <type category="basetype">typedef <type>uint32_t</type> <name>VkFlags</name>;</type>
        <type category="handle" parent="VkInstance" objtypeenum="VK_OBJECT_TYPE_PHYSICAL_DEVICE"><type>VK_DEFINE_HANDLE</type>(<name>VkPhysicalDevice</name>)</type>
        <type name="VkStructureType" category="enum"/>
        <type requires="VkAccessFlagBits2" category="bitmask">typedef <type>VkFlags64</type> <name>VkAccessFlags2</name>;</type>
        <type category="struct" name="VkApplicationInfo">
            <member values="VK_STRUCTURE_TYPE_APPLICATION_INFO"><type>VkStructureType</type> <name>sType</name></member>
            <member optional="true">const <type>void</type>*     <name>pNext</name></member>
            <member optional="true" len="null-terminated">const <type>char</type>*     <name>pApplicationName</name></member>
            <member><type>uint32_t</type>        <name>apiVersion</name><comment>highest API version</comment></member>
        </type>
        <type category="struct" name="VkPhysicalDeviceLimits" returnedonly="true">
            <member limittype="max"><type>uint32_t</type> <name>maxImageDimension1D</name></member>
            <member limittype="min,mul"><type>size_t</type> <name>minMemoryMapAlignment</name></member>
            <member limittype="bitmask"><type>VkSampleCountFlags</type> <name>framebufferColorSampleCounts</name></member>
        </type>
        <type category="struct" name="VkPhysicalDeviceFeatures2" structextends="VkDeviceCreateInfo">
            <member values="VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2"><type>VkStructureType</type> <name>sType</name></member>
            <member optional="true"><type>void</type>* <name>pNext</name></member>
        </type>
        <type category="union" name="VkClearColorValue" comment="// Union allowing specification of floating point, integer, or unsigned integer color data.">
            <member><type>float</type> <name>float32</name>[4]</member>
            <member><type>int32_t</type> <name>int32</name>[4]</member>
        </type>
        <type name="VkPhysicalDeviceFeatures2KHR" category="struct" alias="VkPhysicalDeviceFeatures2"/>
    </types>
    <enums name="API Constants" type="constants" comment="Vulkan hardcoded constants">
        <enum type="uint32_t" value="256" name="VK_MAX_PHYSICAL_DEVICE_NAME_SIZE"/>
        <enum name="VK_LUID_SIZE_KHR" alias="VK_LUID_SIZE"/>
    </enums>
    <enums name="VkImageLayout" type="enum">
        <enum value="0" name="VK_IMAGE_LAYOUT_UNDEFINED" comment="Implicit layout an image is when its contents are undefined due to various reasons (e.g. right after creation)"/>
        <enum value="1" name="VK_IMAGE_LAYOUT_GENERAL"/>
    </enums>
    <enums name="VkAccessFlagBits2" type="bitmask" bitwidth="64">
        <enum value="0" name="VK_ACCESS_2_NONE"/>
        <enum bitpos="0" name="VK_ACCESS_2_INDIRECT_COMMAND_READ_BIT"/>
    </enums>
    <enums start="1000" end="0x7FF" vendor="KHR" comment="Reserved block">
        <unused start="1000" end="1010" comment="Reserved for a future extension"/>
    </enums>
    <commands comment="Vulkan command definitions">
        <command successcodes="VK_SUCCESS" errorcodes="VK_ERROR_OUT_OF_HOST_MEMORY,VK_ERROR_OUT_OF_DEVICE_MEMORY,VK_ERROR_INITIALIZATION_FAILED">
            <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
            <param>const <type>VkInstanceCreateInfo</type>* <name>pCreateInfo</name></param>
            <param optional="true">const <type>VkAllocationCallbacks</type>* <name>pAllocator</name></param>
            <param><type>VkInstance</type>* <name>pInstance</name></param>
        </command>
        <command>
            <proto><type>void</type> <name>vkDestroyInstance</name></proto>
            <param optional="true" externsync="true"><type>VkInstance</type> <name>instance</name></param>
            <param optional="false,true">const <type>VkAllocationCallbacks</type>* <name>pAllocator</name></param>
        </command>
        <command queues="graphics" renderpass="inside" cmdbufferlevel="primary,secondary" pipeline="graphics">
            <proto><type>void</type> <name>vkCmdDraw</name></proto>
            <param externsync="true"><type>VkCommandBuffer</type> <name>commandBuffer</name></param>
            <param><type>uint32_t</type> <name>vertexCount</name></param>
        </command>
        <command queues="graphics" renderpass="outside" cmdbufferlevel="primary">
            <proto><type>void</type> <name>vkCmdBeginRenderPass</name></proto>
            <param externsync="commandBuffer"><type>VkCommandBuffer</type> <name>commandBuffer</name></param>
        </command>
        <command queues="transfer,graphics,compute" renderpass="both" cmdbufferlevel="primary,secondary">
            <proto><type>void</type> <name>vkCmdPipelineBarrier</name></proto>
            <param externsync="true"><type>VkCommandBuffer</type> <name>commandBuffer</name></param>
        </command>
        <command name="vkGetPhysicalDeviceFeatures2KHR" alias="vkGetPhysicalDeviceFeatures2"/>
    </commands>
    <feature api="vulkan,vulkansc" name="VK_VERSION_1_0" number="1.0" comment="Vulkan core API interface definitions">
        <require comment="Header boilerplate">
            <type name="vk_platform"/>
        </require>
        <require comment="API constants">
            <enum name="VK_MAX_PHYSICAL_DEVICE_NAME_SIZE"/>
            <type name="VkPhysicalDeviceLimits"/>
            <command name="vkCreateInstance"/>
        </require>
    </feature>
    <feature api="vulkansc" name="VKSC_VERSION_1_0" number="1.0">
        <remove comment="Features not supported in Vulkan SC">
            <command name="vkCmdDraw"/>
        </remove>
    </feature>
    <extensions comment="Vulkan extension interface definitions">
        <extension name="VK_KHR_surface" number="1" type="instance" author="KHR" contact="James Jones @cubanismo" supported="vulkan,vulkansc">
            <require>
                <enum value="25" name="VK_KHR_SURFACE_SPEC_VERSION"/>
                <enum offset="0" extends="VkResult" dir="-" name="VK_ERROR_SURFACE_LOST_KHR"/>
                <type name="VkSurfaceKHR"/>
            </require>
        </extension>
        <extension name="VK_KHR_get_physical_device_properties2" number="60" type="instance" supported="vulkan" promotedto="VK_VERSION_1_1" sortorder="1" requiresCore="1.1" specialuse="devtools">
            <require>
                <command name="vkGetPhysicalDeviceFeatures2KHR"/>
            </require>
        </extension>
        <extension name="VK_KHR_portability_subset" number="164" type="device" depends="VK_KHR_get_physical_device_properties2" platform="provisional" provisional="true" supported="vulkan" requires="VK_KHR_get_physical_device_properties2"/>
        <extension name="VK_NV_extension_1" number="1" author="NV" supported="disabled"/>
    </extensions>
    <spirvextensions comment="SPIR-V extensions">
        <spirvextension name="SPV_KHR_variable_pointers"/>
    </spirvextensions>
</registry>
"#;

fn parse(text: &str) -> Registry {
    parse_stream(text.as_bytes()).unwrap()
}

/// A registry with every required wrapper, filled in with the given content.
fn document(types: &str, enums: &str, commands: &str, extensions: &str) -> String {
    format!(
        r#"<registry>
    <platforms/>
    <tags/>
    <types>{}</types>
    {}
    <commands>{}</commands>
    <extensions>{}</extensions>
</registry>"#,
        types, enums, commands, extensions
    )
}

fn decode_error(text: &str) -> Error {
    match parse_stream(text.as_bytes()) {
        Err(FatalError::Decode(e)) => e,
        other => panic!("expected a decode error, got {:?}", other),
    }
}

fn find_type<'a>(registry: &'a Registry, name: &str) -> &'a Typedef {
    registry
        .types()
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("type {} not found", name))
}

fn find_command<'a>(registry: &'a Registry, name: &str) -> &'a Command {
    registry
        .commands()
        .iter()
        .find(|c| c.name() == Some(name))
        .unwrap_or_else(|| panic!("command {} not found", name))
}

//--------------------------------------------------------------------------------------------------
#[test]
fn test_registry_header() {
    let registry = parse(VK_XML);

    assert_eq!(registry.comments(), ["Copyright 2015-2024 The Khronos Group Inc."]);

    let platforms = registry.platforms();
    assert_eq!(platforms.len(), 2);
    assert_eq!(platforms[0].name, "xlib");
    assert_eq!(platforms[0].protect, "VK_USE_PLATFORM_XLIB_KHR");
    assert_eq!(platforms[1].name, "wayland");

    let tags = registry.tags();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "KHR");
    assert_eq!(tags[0].author, "Khronos");
    assert_eq!(tags[1].contact, "Jon Leech @oddhack");

    assert_eq!(
        registry.wrapper_comment(Wrapper::Types),
        Some("Vulkan type definitions")
    );
    assert_eq!(
        registry.wrapper_comment(Wrapper::Commands),
        Some("Vulkan command definitions")
    );
}

#[test]
fn test_types_in_document_order() {
    let registry = parse(VK_XML);
    let names: Vec<&str> = registry.types().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "vk_platform",
            "VkFlags",
            "VkPhysicalDevice",
            "VkStructureType",
            "VkAccessFlags2",
            "VkApplicationInfo",
            "VkPhysicalDeviceLimits",
            "VkPhysicalDeviceFeatures2",
            "VkClearColorValue",
            "VkPhysicalDeviceFeatures2KHR",
        ]
    );
}

#[test]
fn test_simple_categories() {
    let registry = parse(VK_XML);

    assert_eq!(find_type(&registry, "vk_platform").category, Some(Category::Include));
    assert_eq!(find_type(&registry, "VkFlags").category, Some(Category::BaseType));
    assert_eq!(find_type(&registry, "VkStructureType").category, Some(Category::Enum));

    let bitmask = find_type(&registry, "VkAccessFlags2");
    assert_eq!(bitmask.category, Some(Category::Bitmask));
    assert_eq!(bitmask.requires.as_deref(), Some("VkAccessFlagBits2"));

    match &find_type(&registry, "VkPhysicalDevice").category {
        Some(Category::Handle {
            parent,
            objtypeenum,
        }) => {
            assert_eq!(parent.as_deref(), Some("VkInstance"));
            assert_eq!(objtypeenum.as_deref(), Some("VK_OBJECT_TYPE_PHYSICAL_DEVICE"));
        }
        other => panic!("unexpected category {:?}", other),
    }
}

#[test]
fn test_struct_members() {
    let registry = parse(VK_XML);
    let info = find_type(&registry, "VkApplicationInfo");

    let members = match &info.category {
        Some(Category::Struct {
            returned_only,
            struct_extends,
            allow_duplicate,
            members,
        }) => {
            assert!(!*returned_only);
            assert!(!*allow_duplicate);
            assert_eq!(*struct_extends, None);
            members
        }
        other => panic!("unexpected category {:?}", other),
    };
    assert_eq!(members.len(), 4);

    let s_type = &members[0];
    assert_eq!(s_type.name, "sType");
    assert_eq!(s_type.type_name.as_deref(), Some("VkStructureType"));
    assert_eq!(
        s_type.structure_types,
        Some(vec![String::from("VK_STRUCTURE_TYPE_APPLICATION_INFO")])
    );
    assert!(!s_type.is_optional);

    let p_next = &members[1];
    assert_eq!(p_next.name, "pNext");
    assert_eq!(p_next.type_name.as_deref(), Some("void"));
    assert!(p_next.is_optional);
    assert_eq!(p_next.structure_types, None);

    assert_eq!(members[2].len.as_deref(), Some("null-terminated"));
    assert_eq!(members[3].comment.as_deref(), Some("highest API version"));
}

#[test]
fn test_struct_attributes() {
    let registry = parse(VK_XML);

    match &find_type(&registry, "VkPhysicalDeviceLimits").category {
        Some(Category::Struct {
            returned_only,
            members,
            ..
        }) => {
            assert!(*returned_only);
            let limits: Vec<Option<LimitType>> = members.iter().map(|m| m.limittype).collect();
            assert_eq!(
                limits,
                [Some(LimitType::Max), Some(LimitType::MinMul), Some(LimitType::Bitmask)]
            );
        }
        other => panic!("unexpected category {:?}", other),
    }

    match &find_type(&registry, "VkPhysicalDeviceFeatures2").category {
        Some(Category::Struct { struct_extends, .. }) => {
            assert_eq!(
                *struct_extends,
                Some(vec![String::from("VkDeviceCreateInfo")])
            );
        }
        other => panic!("unexpected category {:?}", other),
    }

    let union = find_type(&registry, "VkClearColorValue");
    assert_eq!(union.category.as_ref().map(Category::token), Some("union"));
    let names: Vec<&str> = union
        .category
        .as_ref()
        .map(|c| c.members())
        .unwrap_or_default()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, ["float32", "int32"]);

    let alias = find_type(&registry, "VkPhysicalDeviceFeatures2KHR");
    assert_eq!(alias.alias.as_deref(), Some("VkPhysicalDeviceFeatures2"));
    assert_eq!(alias.category.as_ref().map(|c| c.members().len()), Some(0));
}

#[test]
fn test_constants() {
    let registry = parse(VK_XML);
    let groups = registry.constants();
    assert_eq!(groups.len(), 4);

    let api_constants = &groups[0];
    assert_eq!(api_constants.name.as_deref(), Some("API Constants"));
    assert_eq!(api_constants.kind, Some(ConstantsKind::Constants));
    assert_eq!(api_constants.constants[0].value.as_deref(), Some("256"));
    assert_eq!(api_constants.constants[0].type_name.as_deref(), Some("uint32_t"));
    assert_eq!(api_constants.constants[1].alias.as_deref(), Some("VK_LUID_SIZE"));

    let layouts = &groups[1];
    assert_eq!(layouts.kind, Some(ConstantsKind::Enumeration));
    assert_eq!(layouts.bitwidth, 32);
    assert_eq!(layouts.start, None);
    assert_eq!(layouts.end, None);
    assert_eq!(layouts.constants.len(), 2);

    let access = &groups[2];
    assert_eq!(access.kind, Some(ConstantsKind::Bitmask));
    assert_eq!(access.bitwidth, 64);
    assert_eq!(access.constants[1].bitpos.as_deref(), Some("0"));

    let reserved = &groups[3];
    assert_eq!(reserved.name, None);
    assert_eq!(reserved.kind, None);
    assert_eq!(reserved.start, Some(1000));
    assert_eq!(reserved.end, Some(0x7FF));
    assert_eq!(reserved.vendor.as_deref(), Some("KHR"));
    assert_eq!(reserved.unused.len(), 1);
    assert_eq!(reserved.unused[0].start, 1000);
    assert_eq!(reserved.unused[0].end, Some(1010));
}

#[test]
fn test_command_definition() {
    let registry = parse(VK_XML);
    let create = find_command(&registry, "vkCreateInstance");

    let proto = create.prototype.as_ref().unwrap();
    assert_eq!(proto.name, "vkCreateInstance");
    assert_eq!(proto.return_type.as_deref(), Some("VkResult"));
    assert_eq!(create.success_codes, Some(vec![String::from("VK_SUCCESS")]));
    assert_eq!(create.error_codes.as_ref().map(Vec::len), Some(3));
    assert_eq!(create.queues, None);
    assert_eq!(create.render_pass, None);
    assert!(!create.is_alias());

    let params: Vec<&str> = create.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, ["pCreateInfo", "pAllocator", "pInstance"]);
    assert_eq!(create.parameters[0].type_name.as_deref(), Some("VkInstanceCreateInfo"));
    assert!(create.parameters[1].is_optional);
    assert!(!create.parameters[2].is_optional);
}

#[test]
fn test_parameter_flags() {
    let registry = parse(VK_XML);

    let destroy = find_command(&registry, "vkDestroyInstance");
    assert!(destroy.parameters[0].is_extern_sync);
    assert!(destroy.parameters[0].is_optional);
    // Only the outermost indirection level counts.
    assert!(!destroy.parameters[1].is_optional);
    assert!(!destroy.parameters[1].is_extern_sync);

    let begin = find_command(&registry, "vkCmdBeginRenderPass");
    assert!(!begin.parameters[0].is_extern_sync);
    assert_eq!(begin.parameters[0].externsync.as_deref(), Some("commandBuffer"));
}

#[test]
fn test_command_scopes() {
    let registry = parse(VK_XML);

    let draw = find_command(&registry, "vkCmdDraw");
    assert_eq!(draw.queues, Some(vec![Queue::Graphics]));
    assert_eq!(draw.render_pass, Some(vec![RenderPass::Inside]));
    assert_eq!(
        draw.command_buffer_levels,
        Some(vec![CommandBufferLevel::Primary, CommandBufferLevel::Secondary])
    );
    assert_eq!(draw.pipeline, Some(Pipeline::Graphics));

    let begin = find_command(&registry, "vkCmdBeginRenderPass");
    assert_eq!(begin.render_pass, Some(vec![RenderPass::Outside]));
    assert_eq!(begin.command_buffer_levels, Some(vec![CommandBufferLevel::Primary]));
    assert_eq!(begin.pipeline, None);

    let barrier = find_command(&registry, "vkCmdPipelineBarrier");
    assert_eq!(
        barrier.render_pass,
        Some(vec![RenderPass::Inside, RenderPass::Outside])
    );
    assert_eq!(
        barrier.queues,
        Some(vec![Queue::Transfer, Queue::Graphics, Queue::Compute])
    );
}

#[test]
fn test_command_alias() {
    let registry = parse(VK_XML);
    let alias = find_command(&registry, "vkGetPhysicalDeviceFeatures2KHR");
    assert!(alias.is_alias());
    assert!(alias.prototype.is_none());
    assert!(alias.parameters.is_empty());
    assert_eq!(alias.alias.as_deref(), Some("vkGetPhysicalDeviceFeatures2"));
}

#[test]
fn test_features() {
    let registry = parse(VK_XML);
    let features = registry.features();
    assert_eq!(features.len(), 2);

    let core = &features[0];
    assert_eq!(core.apis, ["vulkan", "vulkansc"]);
    assert_eq!(core.name, "VK_VERSION_1_0");
    assert_eq!(core.number, "1.0");
    assert_eq!(core.remove, None);

    let require = core.require.as_ref().unwrap();
    assert_eq!(require.len(), 2);
    assert_eq!(require[0].comment.as_deref(), Some("Header boilerplate"));
    assert_eq!(require[0].types[0].name, "vk_platform");
    assert_eq!(require[1].constants[0].name, "VK_MAX_PHYSICAL_DEVICE_NAME_SIZE");
    assert_eq!(require[1].types[0].name, "VkPhysicalDeviceLimits");
    assert_eq!(require[1].commands[0].name(), Some("vkCreateInstance"));

    let sc = &features[1];
    assert_eq!(sc.require, None);
    let remove = sc.remove.as_ref().unwrap();
    assert_eq!(remove[0].commands[0].name(), Some("vkCmdDraw"));
}

#[test]
fn test_extension_profiles() {
    let registry = parse(VK_XML);
    let extensions = registry.extensions();
    assert_eq!(extensions.len(), 4);

    let surface = &extensions[0];
    assert_eq!(
        surface.profile,
        Profile::Enabled(vec![
            Api::VulkanSc(Some(Target::Instance)),
            Api::Vulkan(Some(Target::Instance)),
        ])
    );
    assert_eq!(surface.sort_order, "0");
    assert_eq!(surface.requires_core, "1.0");
    assert_eq!(surface.author.as_deref(), Some("KHR"));

    let props2 = &extensions[1];
    assert_eq!(
        props2.profile,
        Profile::Enabled(vec![Api::Vulkan(Some(Target::Instance))])
    );
    assert_eq!(props2.sort_order, "1");
    assert_eq!(props2.requires_core, "1.1");
    assert_eq!(props2.promoted_to.as_deref(), Some("VK_VERSION_1_1"));
    assert_eq!(props2.special_use, Some(vec![String::from("devtools")]));

    let portability = &extensions[2];
    assert_eq!(
        portability.profile,
        Profile::Enabled(vec![Api::Vulkan(Some(Target::Device))])
    );
    assert!(portability.provisional);
    assert_eq!(
        portability.required_extensions,
        Some(vec![String::from("VK_KHR_get_physical_device_properties2")])
    );
    assert_eq!(portability.require, None);

    let disabled = &extensions[3];
    assert_eq!(disabled.profile, Profile::Disabled);
    assert_eq!(disabled.contact, None);
}

#[test]
fn test_extension_requirements() {
    let registry = parse(VK_XML);
    let surface = &registry.extensions()[0];
    let require = surface.require.as_ref().unwrap();

    let lost = &require[0].constants[1];
    assert_eq!(lost.name, "VK_ERROR_SURFACE_LOST_KHR");
    assert_eq!(lost.extends.as_deref(), Some("VkResult"));
    assert_eq!(lost.offset.as_deref(), Some("0"));
    assert_eq!(lost.dir.as_deref(), Some("-"));
    assert_eq!(require[0].types[0].name, "VkSurfaceKHR");
}

#[test]
fn test_disabled_profile_ignores_type() {
    let text = document(
        "",
        "",
        "",
        r#"<extension name="VK_EXT_a" number="1" type="instance" supported="disabled"/>
           <extension name="VK_EXT_b" number="2" type="bogus" supported="disabled"/>"#,
    );
    let registry = parse(&text);
    assert_eq!(registry.extensions()[0].profile, Profile::Disabled);
    assert_eq!(registry.extensions()[1].profile, Profile::Disabled);
}

#[test]
fn test_profile_without_type() {
    let text = document(
        "",
        "",
        "",
        r#"<extension name="VK_EXT_a" number="1" supported="vulkansc,vulkan"/>
           <extension name="VK_EXT_b" number="2" supported="vulkan,future_api"/>"#,
    );
    let registry = parse(&text);
    assert_eq!(
        registry.extensions()[0].profile,
        Profile::Enabled(vec![Api::VulkanSc(None), Api::Vulkan(None)])
    );
    assert_eq!(
        registry.extensions()[1].profile,
        Profile::Enabled(vec![Api::Vulkan(None)])
    );
}

//--------------------------------------------------------------------------------------------------
#[test]
fn test_encode_then_decode() {
    let registry = parse(VK_XML);
    let element = registry.to_element();
    assert_eq!(element.name, "registry");
    assert_eq!(decode_registry(&element).unwrap(), registry);
}

#[test]
fn test_encode_keeps_wrapper_comments() {
    let registry = parse(VK_XML);
    let element = registry.to_element();

    for wrapper in Wrapper::ALL.iter() {
        let child = element.first_element(wrapper.element_name()).unwrap();
        assert_eq!(child.attribute("comment"), registry.wrapper_comment(*wrapper));
    }
    assert_eq!(
        element
            .first_element("platforms")
            .and_then(|e| e.attribute("comment")),
        Some("Vulkan platform names, reserved for use with platform- and window system-specific extensions")
    );
}

#[test]
fn test_write_then_parse() {
    let registry = parse(VK_XML);
    let mut buffer = Vec::new();
    registry.write_xml(&mut buffer).unwrap();

    let reparsed = parse_stream(buffer.as_slice()).unwrap();
    assert_eq!(reparsed, registry);
    assert_eq!(
        reparsed.wrapper_comment(Wrapper::Extensions),
        Some("Vulkan extension interface definitions")
    );
}

#[test]
fn test_decode_built_tree() {
    let root = Element::new("registry")
        .with_child(Element::new("platforms"))
        .with_child(Element::new("tags").with_attribute("comment", "vendor tags"))
        .with_child(Element::new("types"))
        .with_child(Element::new("commands"))
        .with_child(
            Element::new("extensions").with_child(
                Element::new("extension")
                    .with_attribute("name", "VK_KHR_swapchain")
                    .with_attribute("number", "2")
                    .with_attribute("type", "device")
                    .with_attribute("supported", "vulkan"),
            ),
        );

    let registry = decode_registry(&root).unwrap();
    assert!(registry.types().is_empty());
    assert!(registry.constants().is_empty());
    assert_eq!(registry.wrapper_comment(Wrapper::Tags), Some("vendor tags"));
    assert_eq!(registry.wrapper_comment(Wrapper::Platforms), None);
    assert_eq!(
        registry.extensions()[0].profile,
        Profile::Enabled(vec![Api::Vulkan(Some(Target::Device))])
    );
}

//--------------------------------------------------------------------------------------------------
#[test]
fn test_unknown_category() {
    let text = document(r#"<type category="bogus" name="VkBogus"/>"#, "", "", "");
    match decode_error(&text) {
        Error::UnrecognizedDiscriminant {
            xpath,
            attribute,
            value,
        } => {
            assert_eq!(xpath, "/registry/types/type[@name='VkBogus']");
            assert_eq!(attribute, "category");
            assert_eq!(value, "bogus");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unknown_limittype() {
    let text = document(
        r#"<type category="struct" name="VkLimits"><member limittype="sideways"><type>uint32_t</type> <name>x</name></member></type>"#,
        "",
        "",
        "",
    );
    match decode_error(&text) {
        Error::UnrecognizedDiscriminant { attribute, value, .. } => {
            assert_eq!(attribute, "limittype");
            assert_eq!(value, "sideways");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unknown_renderpass() {
    let text = document(
        "",
        "",
        r#"<command renderpass="nowhere"><proto><type>void</type> <name>vkCmdFoo</name></proto></command>"#,
        "",
    );
    let error = decode_error(&text);
    assert_eq!(error.xpath(), "/registry/commands/command[@name='vkCmdFoo']");
    match error {
        Error::UnrecognizedDiscriminant { attribute, .. } => assert_eq!(attribute, "renderpass"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unknown_queue() {
    let text = document(
        "",
        "",
        r#"<command queues="graphics,holographic"><proto><type>void</type> <name>vkCmdFoo</name></proto></command>"#,
        "",
    );
    match decode_error(&text) {
        Error::UnrecognizedDiscriminant {
            xpath,
            attribute,
            value,
        } => {
            assert_eq!(xpath, "/registry/commands/command[@name='vkCmdFoo']");
            assert_eq!(attribute, "queues");
            assert_eq!(value, "holographic");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unknown_cmdbufferlevel() {
    let text = document(
        "",
        "",
        r#"<command cmdbufferlevel="primary,tertiary"><proto><type>void</type> <name>vkCmdFoo</name></proto></command>"#,
        "",
    );
    match decode_error(&text) {
        Error::UnrecognizedDiscriminant { attribute, value, .. } => {
            assert_eq!(attribute, "cmdbufferlevel");
            assert_eq!(value, "tertiary");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_data_graph_queue() {
    let text = document(
        "",
        "",
        r#"<command queues="data_graph"><proto><type>void</type> <name>vkCmdDispatchDataGraphARM</name></proto></command>"#,
        "",
    );
    let registry = parse(&text);
    assert_eq!(registry.commands()[0].queues, Some(vec![Queue::DataGraph]));
}

#[test]
fn test_missing_attribute() {
    let text = r#"<registry>
        <platforms><platform name="xlib"/></platforms>
        <tags/><types/><commands/><extensions/>
    </registry>"#;
    match decode_error(text) {
        Error::MissingRequiredField { xpath, kind, name } => {
            assert_eq!(xpath, "/registry/platforms/platform[@name='xlib']");
            assert_eq!(kind, FieldKind::Attribute);
            assert_eq!(name, "protect");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_member_name() {
    let text = document(
        r#"<type category="struct" name="VkBroken"><member><type>uint32_t</type></member></type>"#,
        "",
        "",
        "",
    );
    match decode_error(&text) {
        Error::MissingRequiredField { xpath, kind, name } => {
            assert_eq!(xpath, "/registry/types/type[@name='VkBroken']/member");
            assert_eq!(kind, FieldKind::Element);
            assert_eq!(name, "name");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_supported() {
    let text = document("", "", "", r#"<extension name="VK_EXT_a" number="1"/>"#);
    match decode_error(&text) {
        Error::MissingRequiredField { kind, name, .. } => {
            assert_eq!(kind, FieldKind::Attribute);
            assert_eq!(name, "supported");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_command_without_proto() {
    let text = document("", "", r#"<command name="vkFoo" queues="graphics"/>"#, "");
    match decode_error(&text) {
        Error::MissingRequiredField { xpath, kind, name } => {
            assert_eq!(xpath, "/registry/commands/command[@name='vkFoo']");
            assert_eq!(kind, FieldKind::Element);
            assert_eq!(name, "proto");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_command_alias_without_name() {
    let text = document("", "", r#"<command alias="vkFoo"/>"#, "");
    match decode_error(&text) {
        Error::StructuralMismatch { xpath, .. } => assert_eq!(xpath, "/registry/commands/command"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_malformed_integer() {
    let text = document("", r#"<enums name="VkFoo" start="ten"/>"#, "", "");
    match decode_error(&text) {
        Error::MalformedValue {
            xpath,
            attribute,
            text,
            ..
        } => {
            assert_eq!(xpath, "/registry/enums[@name='VkFoo'][@start]");
            assert_eq!(attribute, "start");
            assert_eq!(text, "ten");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_hex_bitwidth() {
    let text = document("", r#"<enums name="VkA" type="bitmask" bitwidth="0x40"/>"#, "", "");
    let registry = parse(&text);
    assert_eq!(registry.constants()[0].bitwidth, 64);

    let text = document("", r#"<enums name="VkA" type="bitmask" bitwidth="0x100000000"/>"#, "", "");
    match decode_error(&text) {
        Error::MalformedValue { xpath, attribute, text, .. } => {
            assert_eq!(xpath, "/registry/enums[@name='VkA'][@bitwidth]");
            assert_eq!(attribute, "bitwidth");
            assert_eq!(text, "0x100000000");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_wrapper() {
    let text = "<registry><platforms/><types/><commands/><extensions/></registry>";
    match decode_error(text) {
        Error::MissingRequiredField { xpath, kind, name } => {
            assert_eq!(xpath, "/registry");
            assert_eq!(kind, FieldKind::Element);
            assert_eq!(name, "tags");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_root_must_be_registry() {
    match parse_stream("<types/>".as_bytes()) {
        Err(FatalError::MissingRegistryElement) => {}
        other => panic!("unexpected result {:?}", other),
    }

    match decode_registry(&Element::new("types")) {
        Err(Error::StructuralMismatch { xpath, .. }) => assert_eq!(xpath, "/types"),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_malformed_xml() {
    match parse_stream("<registry><types></registry>".as_bytes()) {
        Err(FatalError::XmlError(_)) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_first_error_wins() {
    let text = document(
        r#"<type category="bogus" name="VkFirst"/><type category="bogus" name="VkSecond"/>"#,
        "",
        "",
        "",
    );
    assert_eq!(decode_error(&text).xpath(), "/registry/types/type[@name='VkFirst']");
}

//--------------------------------------------------------------------------------------------------
#[cfg(feature = "serialize")]
#[test]
fn test_ron_round_trip() {
    let registry = parse(VK_XML);
    let text = ron::ser::to_string_pretty(&registry, ron::ser::PrettyConfig::default()).unwrap();
    let restored: Registry = ron::from_str(&text).unwrap();
    assert_eq!(restored, registry);
}
