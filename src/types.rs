#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Declares a closed vocabulary of registry tokens together with its conversions.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Parses the token used for this value in the registry.
            pub fn from_token(token: &str) -> Option<$name> {
                match token {
                    $($token => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// The token used for this value in the registry.
            pub fn token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

//--------------------------------------------------------------------------------------------------
/// Rust structure representing the Vulkan registry.
///
/// The registry contains all the information contained in a certain version
/// of the Vulkan (or VulkanSC) specification, stored within a
/// programmer-accessible format. Every collection keeps document order and
/// duplicates are passed through as they appear.
///
/// The grouping elements of the document (`<platforms>`, `<tags>`, `<types>`,
/// `<commands>`, `<extensions>`) are not visible through the accessors, but
/// their comments are kept so that `Registry::to_element` reproduces them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Registry {
    pub(crate) comments: Vec<String>,
    pub(crate) platforms: Wrapped<Platform>,
    pub(crate) tags: Wrapped<Tag>,
    pub(crate) types: Wrapped<Typedef>,
    pub(crate) constants: Vec<Constants>,
    pub(crate) commands: Wrapped<Command>,
    pub(crate) features: Vec<Feature>,
    pub(crate) extensions: Wrapped<Extension>,
}

impl Registry {
    /// Free-floating `<comment>` elements directly under `<registry>`.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// List of supported Vulkan platforms.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms.items
    }

    /// Known extension author tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags.items
    }

    pub fn types(&self) -> &[Typedef] {
        &self.types.items
    }

    /// Every `<enums>` group, including the `API Constants` block.
    pub fn constants(&self) -> &[Constants] {
        &self.constants
    }

    /// Commands are the Vulkan API's name for functions.
    pub fn commands(&self) -> &[Command] {
        &self.commands.items
    }

    /// Feature levels of the API, such as Vulkan 1.0 or 1.1.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions.items
    }

    /// The `comment` attribute carried by one of the grouping elements.
    pub fn wrapper_comment(&self, wrapper: Wrapper) -> Option<&str> {
        match wrapper {
            Wrapper::Platforms => self.platforms.comment.as_deref(),
            Wrapper::Tags => self.tags.comment.as_deref(),
            Wrapper::Types => self.types.comment.as_deref(),
            Wrapper::Commands => self.commands.comment.as_deref(),
            Wrapper::Extensions => self.extensions.comment.as_deref(),
        }
    }
}

/// Identifies one of the grouping elements stripped from the public collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrapper {
    Platforms,
    Tags,
    Types,
    Commands,
    Extensions,
}

impl Wrapper {
    pub const ALL: [Wrapper; 5] = [
        Wrapper::Platforms,
        Wrapper::Tags,
        Wrapper::Types,
        Wrapper::Commands,
        Wrapper::Extensions,
    ];

    /// Element name of the wrapper in the registry document.
    pub fn element_name(&self) -> &'static str {
        match self {
            Wrapper::Platforms => "platforms",
            Wrapper::Tags => "tags",
            Wrapper::Types => "types",
            Wrapper::Commands => "commands",
            Wrapper::Extensions => "extensions",
        }
    }
}

/// A grouping element: an optional comment and a homogeneous list of children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub(crate) struct Wrapped<T> {
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,

    pub items: Vec<T>,
}

//--------------------------------------------------------------------------------------------------
/// A platform refers to a windowing system which Vulkan can use.
///
/// Most operating systems will have only one corresponding platform,
/// but Linux has multiple (XCB, Wayland, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Platform {
    /// Short identifier.
    pub name: String,

    /// C macro name which is used to guard platform-specific definitions.
    pub protect: String,

    /// Human readable description of the platform.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,
}

/// Tags are the little suffixes attached to extension names or items, indicating the author.
///
/// Some examples:
/// - KHR for Khronos extensions
/// - EXT for multi-vendor extensions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Tag {
    /// The name of the tag, e.g. "KHR".
    pub name: String,
    /// Author of the extensions associated with the tag, e.g. "Khronos".
    pub author: String,
    /// Contact information for the extension author(s).
    pub contact: String,
}

//--------------------------------------------------------------------------------------------------
/// A `<type>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Typedef {
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub requires: Option<String>,

    pub name: String,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub alias: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub api: Option<String>,

    /// `None` when the `category` attribute is missing, as for types pulled in
    /// from platform headers.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub category: Option<Category>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,
}

/// The shape of a type, selected by its `category` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Category {
    BaseType,
    Define,
    Include,
    Bitmask,
    Enum,
    FuncPointer,
    Group,
    Handle {
        #[cfg_attr(
            feature = "serialize",
            serde(default, skip_serializing_if = "is_default")
        )]
        parent: Option<String>,
        #[cfg_attr(
            feature = "serialize",
            serde(default, skip_serializing_if = "is_default")
        )]
        objtypeenum: Option<String>,
    },
    Struct {
        returned_only: bool,
        /// Structures whose `pNext` chain this one may extend. `None` when the
        /// attribute is absent.
        #[cfg_attr(
            feature = "serialize",
            serde(default, skip_serializing_if = "is_default")
        )]
        struct_extends: Option<Vec<String>>,
        allow_duplicate: bool,
        members: Vec<Member>,
    },
    Union {
        returned_only: bool,
        #[cfg_attr(
            feature = "serialize",
            serde(default, skip_serializing_if = "is_default")
        )]
        struct_extends: Option<Vec<String>>,
        members: Vec<Member>,
    },
}

impl Category {
    /// The `category` attribute value naming this variant.
    pub fn token(&self) -> &'static str {
        match self {
            Category::BaseType => "basetype",
            Category::Define => "define",
            Category::Include => "include",
            Category::Bitmask => "bitmask",
            Category::Enum => "enum",
            Category::FuncPointer => "funcpointer",
            Category::Group => "group",
            Category::Handle { .. } => "handle",
            Category::Struct { .. } => "struct",
            Category::Union { .. } => "union",
        }
    }

    /// Members of a struct or union, empty for every other category.
    pub fn members(&self) -> &[Member] {
        match self {
            Category::Struct { members, .. } | Category::Union { members, .. } => members,
            _ => &[],
        }
    }
}

/// A member of a struct or union.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Member {
    /// Parsed from `values`; only meaningful on `sType` members, where it
    /// lists the structure type tags the member may take.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub structure_types: Option<Vec<String>>,

    /// Array length expression. Comma-separated components are either a
    /// sibling member name, `null-terminated`, `1`, or a math expression.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub len: Option<String>,

    /// C expression equivalent of `len`.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub altlen: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub externsync: Option<String>,

    pub is_optional: bool,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub selector: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub selection: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub noautovalidity: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub limittype: Option<LimitType>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub type_name: Option<String>,

    pub name: String,

    /// Constant naming the array size, e.g. `VK_UUID_SIZE`.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub enum_name: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub api: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,
}

token_enum! {
    /// How a limit or property member should be compared.
    pub enum LimitType {
        Min => "min",
        Max => "max",
        Bitmask => "bitmask",
        Range => "range",
        Struct => "struct",
        NoAuto => "noauto",
        Exact => "exact",
        Bits => "bits",
        MinMul => "min,mul",
        MaxPot => "max,pot",
        MinPot => "min,pot",
    }
}

//--------------------------------------------------------------------------------------------------
/// An `<enums>` group: an enumeration, a bitmask, or a block of plain constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Constants {
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub name: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub kind: Option<ConstantsKind>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub start: Option<i64>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub end: Option<i64>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub vendor: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,

    /// Width of the underlying type in bits; 32 unless stated otherwise.
    pub bitwidth: u32,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub constants: Vec<Constant>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub unused: Vec<Unused>,
}

impl Default for Constants {
    fn default() -> Self {
        Constants {
            name: None,
            kind: None,
            start: None,
            end: None,
            vendor: None,
            comment: None,
            bitwidth: Constants::DEFAULT_BITWIDTH,
            constants: Vec::new(),
            unused: Vec::new(),
        }
    }
}

impl Constants {
    pub const DEFAULT_BITWIDTH: u32 = 32;
}

token_enum! {
    pub enum ConstantsKind {
        Enumeration => "enum",
        Bitmask => "bitmask",
        /// The `API Constants` block of newer registries.
        Constants => "constants",
    }
}

/// An unused range of enum values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Unused {
    pub start: i64,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub end: Option<i64>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub vendor: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,
}

/// An `<enum>` element, either in an `<enums>` group or in a require block.
///
/// A well-formed constant carries exactly one of `value` and `bitpos` (or is
/// an alias, or an offset in a require block). This is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Constant {
    pub name: String,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub value: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub bitpos: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub api: Option<String>,

    /// C type of an API constant, e.g. `uint32_t`.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub type_name: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub alias: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub extends: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub protect: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub offset: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub extnumber: Option<String>,

    /// `-` for negative offsets.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub dir: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub deprecated: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,
}

//--------------------------------------------------------------------------------------------------
/// A command is just a Vulkan function.
///
/// Full definitions and aliases share this one record: a definition has a
/// `prototype` (and usually `parameters`), an alias has `name` and `alias`.
/// Inside require blocks a command is a plain reference with only `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Command {
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub prototype: Option<Prototype>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub parameters: Vec<Parameter>,

    /// Name of an alias or a reference; definitions are named by their prototype.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub name: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub alias: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub queues: Option<Vec<Queue>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub success_codes: Option<Vec<String>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub error_codes: Option<Vec<String>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub render_pass: Option<Vec<RenderPass>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub command_buffer_levels: Option<Vec<CommandBufferLevel>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub pipeline: Option<Pipeline>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub api: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,
}

impl Command {
    /// The command's name, whichever form it was declared in.
    pub fn name(&self) -> Option<&str> {
        match &self.prototype {
            Some(proto) => Some(proto.name.as_str()),
            None => self.name.as_deref(),
        }
    }

    pub fn is_alias(&self) -> bool {
        self.prototype.is_none() && self.alias.is_some()
    }
}

/// Return type and name of a command, from its `<proto>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Prototype {
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub return_type: Option<String>,

    pub name: String,
}

/// Parameter for this Vulkan function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Parameter {
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub len: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub altlen: Option<String>,

    pub is_optional: bool,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub selector: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub noautovalidity: Option<String>,

    /// Raw `externsync` value; may be an expression such as `pInfo->buffer`.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub externsync: Option<String>,

    /// `true` only when `externsync` is exactly `"true"`.
    pub is_extern_sync: bool,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub type_name: Option<String>,

    pub name: String,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub api: Option<String>,
}

token_enum! {
    /// Queue family capability a command can be submitted to.
    pub enum Queue {
        Graphics => "graphics",
        Compute => "compute",
        Transfer => "transfer",
        SparseBinding => "sparse_binding",
        Protected => "protected",
        Decode => "decode",
        Encode => "encode",
        OpticalFlow => "opticalflow",
        DataGraph => "data_graph",
    }
}

token_enum! {
    pub enum CommandBufferLevel {
        Primary => "primary",
        Secondary => "secondary",
    }
}

token_enum! {
    /// Where a command may be recorded relative to a render pass instance.
    pub enum RenderPass {
        Inside => "inside",
        Outside => "outside",
    }
}

token_enum! {
    pub enum Pipeline {
        Graphics => "graphics",
        Compute => "compute",
        Transfer => "transfer",
        RayTracing => "raytracing",
    }
}

//--------------------------------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Feature {
    /// APIs this feature belongs to, e.g. `["vulkan", "vulkansc"]`.
    pub apis: Vec<String>,

    pub name: String,

    pub number: String,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub require: Option<Vec<Definitions>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub remove: Option<Vec<Definitions>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Extension {
    /// Name of the extension.
    pub name: String,

    /// The unique index of this extension.
    pub number: String,

    /// Relative sortorder; `"0"` unless stated otherwise.
    pub sort_order: String,

    /// Tag name of the author.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub author: Option<String>,

    /// Contact information for extension author(s).
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub contact: Option<String>,

    pub profile: Profile,

    /// Extensions listed in `requires`.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub required_extensions: Option<Vec<String>>,

    /// Core version the extension requires; `"1.0"` unless stated otherwise.
    pub requires_core: String,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub protect: Option<String>,

    /// Which platform it works with, if any.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub platform: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,

    /// Boolean dependency expression over features and extensions.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub depends: Option<String>,

    /// Whether this extension was promoted to core, and in which version.
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub promoted_to: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub deprecated_by: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub obsoleted_by: Option<String>,

    /// 'true' if this extension is released provisionally
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub provisional: bool,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub special_use: Option<Vec<String>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub require: Option<Vec<Definitions>>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub remove: Option<Vec<Definitions>>,
}

impl Extension {
    pub const DEFAULT_SORT_ORDER: &'static str = "0";
    pub const DEFAULT_REQUIRES_CORE: &'static str = "1.0";
}

/// Whether an extension is in use, decoded from its `supported` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Profile {
    Disabled,
    /// APIs the extension is supported on, VulkanSC first.
    Enabled(Vec<Api>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Api {
    Vulkan(Option<Target>),
    VulkanSc(Option<Target>),
}

impl Api {
    /// The `supported` token naming this API.
    pub fn token(&self) -> &'static str {
        match self {
            Api::Vulkan(_) => "vulkan",
            Api::VulkanSc(_) => "vulkansc",
        }
    }

    pub fn target(&self) -> Option<Target> {
        match self {
            Api::Vulkan(target) | Api::VulkanSc(target) => *target,
        }
    }
}

token_enum! {
    /// The level at which an extension applies.
    pub enum Target {
        Instance => "instance",
        Device => "device",
    }
}

/// Contents of a `<require>` or `<remove>` block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Definitions {
    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub constants: Vec<Constant>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub types: Vec<Typedef>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub commands: Vec<Command>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub api: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub depends: Option<String>,

    #[cfg_attr(
        feature = "serialize",
        serde(default, skip_serializing_if = "is_default")
    )]
    pub comment: Option<String>,
}

#[cfg(feature = "serialize")]
fn is_default<T: Default + Eq>(v: &T) -> bool {
    v.eq(&T::default())
}
