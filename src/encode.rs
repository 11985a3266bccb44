//! Turns a `Registry` back into an element tree.
//!
//! The output decodes to an equal `Registry`. Grouping elements are written
//! with the comments they were read with. Within a require block, types come
//! before enums and commands; inside the registry, sections follow the
//! canonical vk.xml order.

use std::borrow::Borrow;
use std::io::Write;

use crate::element::Element;
use crate::error::FatalError;
use crate::types::*;

fn set(element: &mut Element, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        element.set_attribute(name, value);
    }
}

fn set_flag(element: &mut Element, name: &str, value: bool) {
    if value {
        element.set_attribute(name, "true");
    }
}

fn set_list<S: Borrow<str>>(element: &mut Element, name: &str, value: Option<&[S]>) {
    if let Some(tokens) = value {
        element.set_attribute(name, tokens.join(","));
    }
}

fn text_child(name: &str, text: &str) -> Element {
    Element::new(name).with_text(text)
}

fn tokens<T: Copy>(values: &[T], token: fn(&T) -> &'static str) -> Vec<&'static str> {
    values.iter().map(token).collect()
}

impl Registry {
    /// Builds the `<registry>` element tree this registry decodes from.
    pub fn to_element(&self) -> Element {
        let mut root = Element::new("registry");
        for comment in self.comments.iter() {
            root = root.with_child(text_child("comment", comment));
        }
        root = root
            .with_child(wrapper(Wrapper::Platforms, &self.platforms, platform_element))
            .with_child(wrapper(Wrapper::Tags, &self.tags, tag_element))
            .with_child(wrapper(Wrapper::Types, &self.types, type_element));
        for constants in self.constants.iter() {
            root = root.with_child(constants_element(constants));
        }
        root = root.with_child(wrapper(Wrapper::Commands, &self.commands, command_element));
        for feature in self.features.iter() {
            root = root.with_child(feature_element(feature));
        }
        root.with_child(wrapper(Wrapper::Extensions, &self.extensions, extension_element))
    }

    /// Writes this registry as an XML document.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn write_xml<W: Write>(&self, sink: W) -> Result<(), FatalError> {
        self.to_element().write(sink)
    }
}

fn wrapper<T>(kind: Wrapper, wrapped: &Wrapped<T>, encode: fn(&T) -> Element) -> Element {
    let mut element = Element::new(kind.element_name());
    set(&mut element, "comment", wrapped.comment.as_deref());
    for item in wrapped.items.iter() {
        element = element.with_child(encode(item));
    }
    element
}

//--------------------------------------------------------------------------------------------------
fn platform_element(platform: &Platform) -> Element {
    let mut element = Element::new("platform")
        .with_attribute("name", platform.name.as_str())
        .with_attribute("protect", platform.protect.as_str());
    set(&mut element, "comment", platform.comment.as_deref());
    element
}

fn tag_element(tag: &Tag) -> Element {
    Element::new("tag")
        .with_attribute("name", tag.name.as_str())
        .with_attribute("author", tag.author.as_str())
        .with_attribute("contact", tag.contact.as_str())
}

fn type_element(typedef: &Typedef) -> Element {
    let mut element = Element::new("type");
    set(&mut element, "requires", typedef.requires.as_deref());
    element.set_attribute("name", typedef.name.as_str());
    set(&mut element, "alias", typedef.alias.as_deref());
    set(&mut element, "api", typedef.api.as_deref());
    set(&mut element, "comment", typedef.comment.as_deref());

    if let Some(category) = &typedef.category {
        element.set_attribute("category", category.token());
        match category {
            Category::Handle {
                parent,
                objtypeenum,
            } => {
                set(&mut element, "parent", parent.as_deref());
                set(&mut element, "objtypeenum", objtypeenum.as_deref());
            }
            Category::Struct {
                returned_only,
                struct_extends,
                allow_duplicate,
                members,
            } => {
                set_flag(&mut element, "returnedonly", *returned_only);
                set_list(&mut element, "structextends", struct_extends.as_deref());
                set_flag(&mut element, "allowduplicate", *allow_duplicate);
                for member in members.iter() {
                    element = element.with_child(member_element(member));
                }
            }
            Category::Union {
                returned_only,
                struct_extends,
                members,
            } => {
                set_flag(&mut element, "returnedonly", *returned_only);
                set_list(&mut element, "structextends", struct_extends.as_deref());
                for member in members.iter() {
                    element = element.with_child(member_element(member));
                }
            }
            _ => {}
        }
    }
    element
}

fn member_element(member: &Member) -> Element {
    let mut element = Element::new("member");
    set_list(&mut element, "values", member.structure_types.as_deref());
    set(&mut element, "len", member.len.as_deref());
    set(&mut element, "altlen", member.altlen.as_deref());
    set(&mut element, "externsync", member.externsync.as_deref());
    set_flag(&mut element, "optional", member.is_optional);
    set(&mut element, "selector", member.selector.as_deref());
    set(&mut element, "selection", member.selection.as_deref());
    set(&mut element, "noautovalidity", member.noautovalidity.as_deref());
    set(&mut element, "limittype", member.limittype.as_ref().map(LimitType::token));
    set(&mut element, "api", member.api.as_deref());

    if let Some(type_name) = &member.type_name {
        element = element.with_child(text_child("type", type_name));
    }
    element = element.with_child(text_child("name", &member.name));
    if let Some(enum_name) = &member.enum_name {
        element = element.with_child(text_child("enum", enum_name));
    }
    if let Some(comment) = &member.comment {
        element = element.with_child(text_child("comment", comment));
    }
    element
}

//--------------------------------------------------------------------------------------------------
fn constants_element(constants: &Constants) -> Element {
    let mut element = Element::new("enums");
    set(&mut element, "name", constants.name.as_deref());
    set(&mut element, "type", constants.kind.as_ref().map(ConstantsKind::token));
    set(&mut element, "start", constants.start.map(|v| v.to_string()).as_deref());
    set(&mut element, "end", constants.end.map(|v| v.to_string()).as_deref());
    set(&mut element, "vendor", constants.vendor.as_deref());
    set(&mut element, "comment", constants.comment.as_deref());
    if constants.bitwidth != Constants::DEFAULT_BITWIDTH {
        element.set_attribute("bitwidth", constants.bitwidth.to_string());
    }

    for constant in constants.constants.iter() {
        element = element.with_child(constant_element(constant));
    }
    for unused in constants.unused.iter() {
        let mut child = Element::new("unused").with_attribute("start", unused.start.to_string());
        set(&mut child, "end", unused.end.map(|v| v.to_string()).as_deref());
        set(&mut child, "vendor", unused.vendor.as_deref());
        set(&mut child, "comment", unused.comment.as_deref());
        element = element.with_child(child);
    }
    element
}

fn constant_element(constant: &Constant) -> Element {
    let mut element = Element::new("enum");
    set(&mut element, "type", constant.type_name.as_deref());
    set(&mut element, "value", constant.value.as_deref());
    set(&mut element, "bitpos", constant.bitpos.as_deref());
    set(&mut element, "offset", constant.offset.as_deref());
    set(&mut element, "extnumber", constant.extnumber.as_deref());
    set(&mut element, "dir", constant.dir.as_deref());
    set(&mut element, "extends", constant.extends.as_deref());
    element.set_attribute("name", constant.name.as_str());
    set(&mut element, "alias", constant.alias.as_deref());
    set(&mut element, "api", constant.api.as_deref());
    set(&mut element, "protect", constant.protect.as_deref());
    set(&mut element, "deprecated", constant.deprecated.as_deref());
    set(&mut element, "comment", constant.comment.as_deref());
    element
}

//--------------------------------------------------------------------------------------------------
fn command_element(command: &Command) -> Element {
    let mut element = Element::new("command");
    if command.prototype.is_none() {
        set(&mut element, "name", command.name.as_deref());
    }
    set(&mut element, "alias", command.alias.as_deref());

    let queues = command.queues.as_ref().map(|q| tokens(q, Queue::token));
    set_list(&mut element, "queues", queues.as_deref());
    set_list(&mut element, "successcodes", command.success_codes.as_deref());
    set_list(&mut element, "errorcodes", command.error_codes.as_deref());
    if let Some(render_pass) = &command.render_pass {
        let value = if render_pass.contains(&RenderPass::Inside) && render_pass.contains(&RenderPass::Outside) {
            String::from("both")
        } else {
            tokens(render_pass, RenderPass::token).join(",")
        };
        element.set_attribute("renderpass", value);
    }
    let levels = command
        .command_buffer_levels
        .as_ref()
        .map(|l| tokens(l, CommandBufferLevel::token));
    set_list(&mut element, "cmdbufferlevel", levels.as_deref());
    set(&mut element, "pipeline", command.pipeline.as_ref().map(Pipeline::token));
    set(&mut element, "api", command.api.as_deref());
    set(&mut element, "comment", command.comment.as_deref());

    if let Some(proto) = &command.prototype {
        let mut proto_element = Element::new("proto");
        if let Some(return_type) = &proto.return_type {
            proto_element = proto_element.with_child(text_child("type", return_type));
        }
        element = element.with_child(proto_element.with_child(text_child("name", &proto.name)));
        for param in command.parameters.iter() {
            element = element.with_child(parameter_element(param));
        }
    }
    element
}

fn parameter_element(param: &Parameter) -> Element {
    let mut element = Element::new("param");
    set(&mut element, "api", param.api.as_deref());
    set_flag(&mut element, "optional", param.is_optional);
    set(&mut element, "len", param.len.as_deref());
    set(&mut element, "altlen", param.altlen.as_deref());
    set(&mut element, "selector", param.selector.as_deref());
    set(&mut element, "noautovalidity", param.noautovalidity.as_deref());
    set(&mut element, "externsync", param.externsync.as_deref());

    if let Some(type_name) = &param.type_name {
        element = element.with_child(text_child("type", type_name));
    }
    element.with_child(text_child("name", &param.name))
}

//--------------------------------------------------------------------------------------------------
fn feature_element(feature: &Feature) -> Element {
    let mut element = Element::new("feature")
        .with_attribute("api", feature.apis.join(","))
        .with_attribute("name", feature.name.as_str())
        .with_attribute("number", feature.number.as_str());
    set(&mut element, "comment", feature.comment.as_deref());
    definitions_children(element, feature.require.as_deref(), feature.remove.as_deref())
}

fn extension_element(extension: &Extension) -> Element {
    let mut element = Element::new("extension")
        .with_attribute("name", extension.name.as_str())
        .with_attribute("number", extension.number.as_str());
    if extension.sort_order != Extension::DEFAULT_SORT_ORDER {
        element.set_attribute("sortorder", extension.sort_order.as_str());
    }
    match &extension.profile {
        Profile::Disabled => element.set_attribute("supported", "disabled"),
        Profile::Enabled(apis) => {
            element.set_attribute("supported", tokens(apis, Api::token).join(","));
            // Every API shares the one `type` attribute.
            let target = apis.iter().find_map(Api::target);
            set(&mut element, "type", target.as_ref().map(Target::token));
        }
    }
    set(&mut element, "author", extension.author.as_deref());
    set(&mut element, "contact", extension.contact.as_deref());
    set_list(&mut element, "requires", extension.required_extensions.as_deref());
    if extension.requires_core != Extension::DEFAULT_REQUIRES_CORE {
        element.set_attribute("requiresCore", extension.requires_core.as_str());
    }
    set(&mut element, "depends", extension.depends.as_deref());
    set(&mut element, "protect", extension.protect.as_deref());
    set(&mut element, "platform", extension.platform.as_deref());
    set(&mut element, "promotedto", extension.promoted_to.as_deref());
    set(&mut element, "deprecatedby", extension.deprecated_by.as_deref());
    set(&mut element, "obsoletedby", extension.obsoleted_by.as_deref());
    set_flag(&mut element, "provisional", extension.provisional);
    set_list(&mut element, "specialuse", extension.special_use.as_deref());
    set(&mut element, "comment", extension.comment.as_deref());
    definitions_children(element, extension.require.as_deref(), extension.remove.as_deref())
}

fn definitions_children(
    mut element: Element,
    require: Option<&[Definitions]>,
    remove: Option<&[Definitions]>,
) -> Element {
    for block in require.unwrap_or_default() {
        element = element.with_child(definitions_element("require", block));
    }
    for block in remove.unwrap_or_default() {
        element = element.with_child(definitions_element("remove", block));
    }
    element
}

fn definitions_element(name: &str, definitions: &Definitions) -> Element {
    let mut element = Element::new(name);
    set(&mut element, "api", definitions.api.as_deref());
    set(&mut element, "depends", definitions.depends.as_deref());
    set(&mut element, "comment", definitions.comment.as_deref());

    for typedef in definitions.types.iter() {
        element = element.with_child(type_element(typedef));
    }
    for constant in definitions.constants.iter() {
        element = element.with_child(constant_element(constant));
    }
    for command in definitions.commands.iter() {
        element = element.with_child(command_element(command));
    }
    element
}
