use std::io::Read;
use std::path::Path;

use crate::element::Element;
use crate::error::{Error, FatalError};
use crate::types::*;
use crate::util::*;

//--------------------------------------------------------------------------------------------------
/// Parses the Vulkan XML file into a Rust object.
pub fn parse_file(path: &Path) -> Result<Registry, FatalError> {
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    parse_stream(file)
}

/// Parses the Vulkan XML file from stream into a Rust object.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn parse_stream<T: Read>(stream: T) -> Result<Registry, FatalError> {
    let root = Element::read(stream)?;
    if root.name != "registry" {
        return Err(FatalError::MissingRegistryElement);
    }
    Ok(decode_registry(&root)?)
}

/// Decodes a `<registry>` element tree into a `Registry`.
///
/// This is a single top-down pass over an immutable tree. The first error
/// aborts the whole registry; there is no partial result.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn decode_registry(root: &Element) -> Result<Registry, Error> {
    let xpath = xpath_element("", &root.name, None);
    if root.name != "registry" {
        return Err(Error::StructuralMismatch {
            xpath,
            desc: String::from("root element is not <registry>"),
        });
    }

    let mut comments = Vec::new();
    let mut platforms = None;
    let mut tags = None;
    let mut types = None;
    let mut constants = Vec::new();
    let mut commands = None;
    let mut features = Vec::new();
    let mut extensions = None;

    for child in root.elements() {
        match child.name.as_str() {
            "comment" => comments.push(child.text()),
            "platforms" => platforms = Some(decode_wrapper(&xpath, child, "platform", decode_platform)?),
            "tags" => tags = Some(decode_wrapper(&xpath, child, "tag", decode_tag)?),
            "types" => types = Some(decode_wrapper(&xpath, child, "type", decode_type)?),
            "enums" => constants.push(decode_constants(&xpath, child)?),
            "commands" => commands = Some(decode_wrapper(&xpath, child, "command", decode_command)?),
            "feature" => features.push(decode_feature(&xpath, child)?),
            "extensions" => {
                extensions = Some(decode_wrapper(&xpath, child, "extension", decode_extension)?)
            }
            _ => skip_element(&xpath, child),
        }
    }

    fn require<T>(xpath: &str, wrapper: Option<Wrapped<T>>, wrapper_name: Wrapper) -> Result<Wrapped<T>, Error> {
        wrapper.ok_or_else(|| Error::missing_element(xpath, wrapper_name.element_name()))
    }

    let registry = Registry {
        comments,
        platforms: require(&xpath, platforms, Wrapper::Platforms)?,
        tags: require(&xpath, tags, Wrapper::Tags)?,
        types: require(&xpath, types, Wrapper::Types)?,
        constants,
        commands: require(&xpath, commands, Wrapper::Commands)?,
        features,
        extensions: require(&xpath, extensions, Wrapper::Extensions)?,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        types = registry.types().len(),
        commands = registry.commands().len(),
        extensions = registry.extensions().len(),
        "decoded registry"
    );

    Ok(registry)
}

fn skip_element(xpath: &str, element: &Element) {
    #[cfg(feature = "tracing")]
    tracing::debug!(xpath = %xpath, element = %element.name, "skipping unrecognized element");
    #[cfg(not(feature = "tracing"))]
    let _ = (xpath, element);
}

/// Unwraps a grouping element, keeping its comment next to the decoded children.
fn decode_wrapper<T>(
    parent: &str,
    element: &Element,
    child_name: &str,
    decode: fn(&str, &Element) -> Result<T, Error>,
) -> Result<Wrapped<T>, Error> {
    let xpath = xpath_element(parent, &element.name, None);
    let mut items = Vec::new();

    for child in element.elements() {
        if child.name == child_name {
            items.push(decode(&xpath, child)?);
        } else {
            skip_element(&xpath, child);
        }
    }

    Ok(Wrapped {
        comment: optional_attribute(element, "comment"),
        items,
    })
}

//--------------------------------------------------------------------------------------------------
fn decode_platform(parent: &str, element: &Element) -> Result<Platform, Error> {
    let xpath = xpath_element(parent, &element.name, element.attribute("name"));
    Ok(Platform {
        name: required_attribute(&xpath, element, "name")?,
        protect: required_attribute(&xpath, element, "protect")?,
        comment: optional_attribute(element, "comment"),
    })
}

fn decode_tag(parent: &str, element: &Element) -> Result<Tag, Error> {
    let xpath = xpath_element(parent, &element.name, element.attribute("name"));
    Ok(Tag {
        name: required_attribute(&xpath, element, "name")?,
        author: required_attribute(&xpath, element, "author")?,
        contact: required_attribute(&xpath, element, "contact")?,
    })
}

//--------------------------------------------------------------------------------------------------
/// Decodes a `<type>` element: common fields first, then the category-specific ones.
fn decode_type(parent: &str, element: &Element) -> Result<Typedef, Error> {
    let name = optional_attribute(element, "name").or_else(|| child_text(element, "name"));
    let xpath = xpath_element(parent, &element.name, name.as_deref());
    let name = name.ok_or_else(|| Error::missing_attribute(&xpath, "name"))?;

    let category = match element.attribute("category") {
        Some(category) => Some(decode_category(&xpath, element, category)?),
        None => None,
    };

    Ok(Typedef {
        requires: optional_attribute(element, "requires"),
        name,
        alias: optional_attribute(element, "alias"),
        api: optional_attribute(element, "api"),
        category,
        comment: optional_attribute(element, "comment"),
    })
}

fn decode_category(xpath: &str, element: &Element, category: &str) -> Result<Category, Error> {
    let category = match category {
        "basetype" => Category::BaseType,
        "define" => Category::Define,
        "include" => Category::Include,
        "bitmask" => Category::Bitmask,
        "enum" => Category::Enum,
        "funcpointer" => Category::FuncPointer,
        "group" => Category::Group,
        "handle" => Category::Handle {
            parent: optional_attribute(element, "parent"),
            objtypeenum: optional_attribute(element, "objtypeenum"),
        },
        "struct" => Category::Struct {
            returned_only: is_true(element.attribute("returnedonly")),
            struct_extends: split_list(element.attribute("structextends")),
            allow_duplicate: is_true(element.attribute("allowduplicate")),
            members: decode_members(xpath, element)?,
        },
        "union" => Category::Union {
            returned_only: is_true(element.attribute("returnedonly")),
            struct_extends: split_list(element.attribute("structextends")),
            members: decode_members(xpath, element)?,
        },
        _ => return Err(Error::unrecognized(xpath, "category", category)),
    };
    Ok(category)
}

fn decode_members(xpath: &str, element: &Element) -> Result<Vec<Member>, Error> {
    element
        .elements()
        .filter(|child| child.name == "member")
        .map(|child| decode_member(xpath, child))
        .collect()
}

fn decode_member(parent: &str, element: &Element) -> Result<Member, Error> {
    let name = child_text(element, "name");
    let xpath = xpath_element(parent, &element.name, name.as_deref());
    let name = name.ok_or_else(|| Error::missing_element(&xpath, "name"))?;

    let limittype = match element.attribute("limittype") {
        Some(text) => Some(
            LimitType::from_token(text).ok_or_else(|| Error::unrecognized(&xpath, "limittype", text))?,
        ),
        None => None,
    };

    Ok(Member {
        structure_types: split_list(element.attribute("values")),
        len: optional_attribute(element, "len"),
        altlen: optional_attribute(element, "altlen"),
        externsync: optional_attribute(element, "externsync"),
        is_optional: is_optional_flag(element.attribute("optional")),
        selector: optional_attribute(element, "selector"),
        selection: optional_attribute(element, "selection"),
        noautovalidity: optional_attribute(element, "noautovalidity"),
        limittype,
        type_name: child_text(element, "type"),
        name,
        enum_name: child_text(element, "enum"),
        api: optional_attribute(element, "api"),
        comment: child_text(element, "comment"),
    })
}

//--------------------------------------------------------------------------------------------------
fn decode_constants(parent: &str, element: &Element) -> Result<Constants, Error> {
    let xpath = xpath_element(parent, &element.name, element.attribute("name"));

    let kind = match element.attribute("type") {
        Some(text) => Some(
            ConstantsKind::from_token(text).ok_or_else(|| Error::unrecognized(&xpath, "type", text))?,
        ),
        None => None,
    };
    let start = optional_integer(&xpath, element, "start")?;
    let end = optional_integer(&xpath, element, "end")?;
    let bitwidth = match element.attribute("bitwidth") {
        Some(text) => parse_unsigned(&xpath, "bitwidth", text)?,
        None => Constants::DEFAULT_BITWIDTH,
    };

    let mut constants = Vec::new();
    let mut unused = Vec::new();
    for child in element.elements() {
        match child.name.as_str() {
            "enum" => constants.push(decode_constant(&xpath, child)?),
            "unused" => unused.push(decode_unused(&xpath, child)?),
            _ => skip_element(&xpath, child),
        }
    }

    Ok(Constants {
        name: optional_attribute(element, "name"),
        kind,
        start,
        end,
        vendor: optional_attribute(element, "vendor"),
        comment: optional_attribute(element, "comment"),
        bitwidth,
        constants,
        unused,
    })
}

fn optional_integer(xpath: &str, element: &Element, attribute: &str) -> Result<Option<i64>, Error> {
    element
        .attribute(attribute)
        .map(|text| parse_integer(xpath, attribute, text))
        .transpose()
}

fn decode_unused(parent: &str, element: &Element) -> Result<Unused, Error> {
    let xpath = xpath_element(parent, &element.name, None);
    let start = required_attribute(&xpath, element, "start")?;
    Ok(Unused {
        start: parse_integer(&xpath, "start", &start)?,
        end: optional_integer(&xpath, element, "end")?,
        vendor: optional_attribute(element, "vendor"),
        comment: optional_attribute(element, "comment"),
    })
}

fn decode_constant(parent: &str, element: &Element) -> Result<Constant, Error> {
    let xpath = xpath_element(parent, &element.name, element.attribute("name"));
    Ok(Constant {
        name: required_attribute(&xpath, element, "name")?,
        value: optional_attribute(element, "value"),
        bitpos: optional_attribute(element, "bitpos"),
        api: optional_attribute(element, "api"),
        type_name: optional_attribute(element, "type"),
        alias: optional_attribute(element, "alias"),
        extends: optional_attribute(element, "extends"),
        protect: optional_attribute(element, "protect"),
        offset: optional_attribute(element, "offset"),
        extnumber: optional_attribute(element, "extnumber"),
        dir: optional_attribute(element, "dir"),
        deprecated: optional_attribute(element, "deprecated"),
        comment: optional_attribute(element, "comment"),
    })
}

//--------------------------------------------------------------------------------------------------
/// Decodes a `<command>` from the `<commands>` block: a full definition or an alias.
fn decode_command(parent: &str, element: &Element) -> Result<Command, Error> {
    let proto = element.first_element("proto");
    let name = match proto {
        Some(proto) => child_text(proto, "name"),
        None => optional_attribute(element, "name"),
    };
    let xpath = xpath_element(parent, &element.name, name.as_deref());

    let mut command = decode_command_attributes(&xpath, element)?;
    match proto {
        Some(proto) => {
            let proto_xpath = xpath_element(&xpath, &proto.name, None);
            command.prototype = Some(Prototype {
                return_type: child_text(proto, "type"),
                name: child_text(proto, "name")
                    .ok_or_else(|| Error::missing_element(&proto_xpath, "name"))?,
            });
            command.parameters = element
                .elements()
                .filter(|child| child.name == "param")
                .map(|child| decode_parameter(&xpath, child))
                .collect::<Result<Vec<_>, _>>()?;
            // The alias of a definition lives in a child element.
            if command.alias.is_none() {
                command.alias = element
                    .first_element("alias")
                    .and_then(|alias| optional_attribute(alias, "name"));
            }
        }
        None => {
            if command.alias.is_none() {
                return Err(Error::missing_element(&xpath, "proto"));
            }
            if name.is_none() {
                return Err(Error::StructuralMismatch {
                    xpath,
                    desc: String::from(
                        "command is neither a definition with <proto> nor an alias with name and alias",
                    ),
                });
            }
            command.name = name;
        }
    }

    Ok(command)
}

/// Decodes a `<command name="..."/>` reference inside a require or remove block.
fn decode_command_reference(parent: &str, element: &Element) -> Result<Command, Error> {
    let xpath = xpath_element(parent, &element.name, element.attribute("name"));
    let mut command = decode_command_attributes(&xpath, element)?;
    command.name = Some(required_attribute(&xpath, element, "name")?);
    Ok(command)
}

fn decode_command_attributes(xpath: &str, element: &Element) -> Result<Command, Error> {
    let render_pass = match element.attribute("renderpass") {
        Some("both") => Some(vec![RenderPass::Inside, RenderPass::Outside]),
        Some(text) => Some(vec![
            RenderPass::from_token(text).ok_or_else(|| Error::unrecognized(xpath, "renderpass", text))?
        ]),
        None => None,
    };
    let pipeline = match element.attribute("pipeline") {
        Some(text) => {
            Some(Pipeline::from_token(text).ok_or_else(|| Error::unrecognized(xpath, "pipeline", text))?)
        }
        None => None,
    };

    Ok(Command {
        prototype: None,
        parameters: Vec::new(),
        name: None,
        alias: optional_attribute(element, "alias"),
        queues: parse_token_list(xpath, element, "queues", Queue::from_token)?,
        success_codes: split_list(element.attribute("successcodes")),
        error_codes: split_list(element.attribute("errorcodes")),
        render_pass,
        command_buffer_levels: parse_token_list(
            xpath,
            element,
            "cmdbufferlevel",
            CommandBufferLevel::from_token,
        )?,
        pipeline,
        api: optional_attribute(element, "api"),
        comment: optional_attribute(element, "comment"),
    })
}

fn decode_parameter(parent: &str, element: &Element) -> Result<Parameter, Error> {
    let name = child_text(element, "name");
    let xpath = xpath_element(parent, &element.name, name.as_deref());
    let name = name.ok_or_else(|| Error::missing_element(&xpath, "name"))?;
    let externsync = optional_attribute(element, "externsync");

    Ok(Parameter {
        len: optional_attribute(element, "len"),
        altlen: optional_attribute(element, "altlen"),
        is_optional: is_optional_flag(element.attribute("optional")),
        selector: optional_attribute(element, "selector"),
        noautovalidity: optional_attribute(element, "noautovalidity"),
        is_extern_sync: is_true(externsync.as_deref()),
        externsync,
        type_name: child_text(element, "type"),
        name,
        api: optional_attribute(element, "api"),
    })
}

//--------------------------------------------------------------------------------------------------
fn decode_feature(parent: &str, element: &Element) -> Result<Feature, Error> {
    let xpath = xpath_element(parent, &element.name, element.attribute("name"));
    let apis = split_list(element.attribute("api")).ok_or_else(|| Error::missing_attribute(&xpath, "api"))?;
    let (require, remove) = decode_definitions_blocks(&xpath, element)?;

    Ok(Feature {
        apis,
        name: required_attribute(&xpath, element, "name")?,
        number: required_attribute(&xpath, element, "number")?,
        comment: optional_attribute(element, "comment"),
        require,
        remove,
    })
}

fn decode_extension(parent: &str, element: &Element) -> Result<Extension, Error> {
    let xpath = xpath_element(parent, &element.name, element.attribute("name"));
    let name = required_attribute(&xpath, element, "name")?;
    let number = required_attribute(&xpath, element, "number")?;
    let profile = decode_profile(&xpath, element)?;
    let (require, remove) = decode_definitions_blocks(&xpath, element)?;

    Ok(Extension {
        name,
        number,
        sort_order: optional_attribute(element, "sortorder")
            .unwrap_or_else(|| String::from(Extension::DEFAULT_SORT_ORDER)),
        author: optional_attribute(element, "author"),
        contact: optional_attribute(element, "contact"),
        profile,
        required_extensions: split_list(element.attribute("requires")),
        requires_core: optional_attribute(element, "requiresCore")
            .unwrap_or_else(|| String::from(Extension::DEFAULT_REQUIRES_CORE)),
        protect: optional_attribute(element, "protect"),
        platform: optional_attribute(element, "platform"),
        comment: optional_attribute(element, "comment"),
        depends: optional_attribute(element, "depends"),
        promoted_to: optional_attribute(element, "promotedto"),
        deprecated_by: optional_attribute(element, "deprecatedby"),
        obsoleted_by: optional_attribute(element, "obsoletedby"),
        provisional: is_true(element.attribute("provisional")),
        special_use: split_list(element.attribute("specialuse")),
        require,
        remove,
    })
}

/// Resolves `supported` (and, when enabled, `type`) into a `Profile`.
///
/// Unknown tokens in `supported` are ignored. APIs are listed VulkanSC first,
/// whatever order the tokens appear in.
fn decode_profile(xpath: &str, element: &Element) -> Result<Profile, Error> {
    let supported = required_attribute(xpath, element, "supported")?;
    if supported == "disabled" {
        return Ok(Profile::Disabled);
    }

    let tokens = split_list(Some(supported.as_str())).unwrap_or_default();
    let target = match element.attribute("type") {
        Some(text) => Some(Target::from_token(text).ok_or_else(|| Error::unrecognized(xpath, "type", text))?),
        None => None,
    };

    let mut apis = Vec::new();
    if tokens.iter().any(|t| t == "vulkansc") {
        apis.push(Api::VulkanSc(target));
    }
    if tokens.iter().any(|t| t == "vulkan") {
        apis.push(Api::Vulkan(target));
    }
    Ok(Profile::Enabled(apis))
}

type DefinitionsBlocks = (Option<Vec<Definitions>>, Option<Vec<Definitions>>);

fn decode_definitions_blocks(xpath: &str, element: &Element) -> Result<DefinitionsBlocks, Error> {
    let mut require = Vec::new();
    let mut remove = Vec::new();

    for child in element.elements() {
        match child.name.as_str() {
            "require" => require.push(decode_definitions(xpath, child)?),
            "remove" => remove.push(decode_definitions(xpath, child)?),
            _ => skip_element(xpath, child),
        }
    }

    let non_empty = |blocks: Vec<Definitions>| if blocks.is_empty() { None } else { Some(blocks) };
    Ok((non_empty(require), non_empty(remove)))
}

fn decode_definitions(parent: &str, element: &Element) -> Result<Definitions, Error> {
    let xpath = xpath_element(parent, &element.name, None);
    let mut definitions = Definitions {
        api: optional_attribute(element, "api"),
        depends: optional_attribute(element, "depends"),
        comment: optional_attribute(element, "comment"),
        ..Definitions::default()
    };

    for child in element.elements() {
        match child.name.as_str() {
            "enum" => definitions.constants.push(decode_constant(&xpath, child)?),
            "type" => definitions.types.push(decode_type(&xpath, child)?),
            "command" => definitions.commands.push(decode_command_reference(&xpath, child)?),
            _ => skip_element(&xpath, child),
        }
    }

    Ok(definitions)
}
