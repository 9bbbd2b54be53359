use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::ctype::CType;
use crate::xml::{Element, Node};
use crate::{RegistryError, RegistryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl FromStr for Version {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RegistryError::BadVersion(s.to_owned());
        let (major, minor) = s.trim().split_once('.').ok_or_else(bad)?;
        Ok(Self {
            major: major.parse().map_err(|_| bad())?,
            minor: minor.parse().map_err(|_| bad())?,
        })
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: CType,
    /// The `len` expression, e.g. `count` or `count*8`.
    pub len: Option<String>,
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub ret: CType,
    pub params: Vec<Param>,
    /// The command this one is an alias of.
    pub alias: Option<String>,
    /// Commands whose `<alias>` names this one.
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub value: String,
    /// `u` or `ull` for unsigned and 64-bit values.
    pub ty: Option<String>,
    pub api: Option<String>,
    pub alias: Option<String>,
    pub group: Option<String>,
}

/// One `<require>` or `<remove>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interface {
    pub api: Option<String>,
    pub profile: Option<String>,
    pub commands: Vec<String>,
    pub enums: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub api: String,
    pub name: String,
    pub number: Version,
    pub require: Vec<Interface>,
    pub remove: Vec<Interface>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: String,
    /// APIs from the `supported` attribute, e.g. `gl|glcore|gles2`.
    pub supported: Vec<String>,
    pub require: Vec<Interface>,
}

impl Extension {
    pub fn supports(&self, api: &str) -> bool {
        self.supported.iter().any(|supported| supported == api)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub commands: BTreeMap<String, Command>,
    /// Enum names can be defined once per API, hence the list.
    pub enums: BTreeMap<String, Vec<EnumValue>>,
    pub features: Vec<Feature>,
    pub extensions: Vec<Extension>,
}

fn required_attr<'e>(
    element: &'e Element,
    tag: &'static str,
    attr: &'static str,
) -> RegistryResult<&'e str> {
    element.attr(attr).ok_or(RegistryError::Missing {
        element: tag,
        what: attr,
    })
}

fn owned_attr(element: &Element, attr: &str) -> Option<String> {
    element.attr(attr).map(str::to_owned)
}

/// Splits a `<proto>` or `<param>` into its name and C type. The type is
/// everything except the `<name>` child, `<ptype>` included.
fn declaration(element: &Element, tag: &'static str) -> RegistryResult<(String, CType)> {
    let name = element.child("name").ok_or(RegistryError::Missing {
        element: tag,
        what: "<name>",
    })?;

    let mut ty = String::new();
    for node in &element.children {
        match node {
            Node::Text(text) => ty.push_str(text),
            Node::Element(child) if child.name != "name" => ty.push_str(&child.text()),
            Node::Element(_) => ty.push(' '),
        }
    }
    Ok((name.text().trim().to_owned(), CType::parse(&ty)?))
}

fn command(element: &Element) -> RegistryResult<Command> {
    let proto = element.child("proto").ok_or(RegistryError::Missing {
        element: "command",
        what: "<proto>",
    })?;
    let (name, ret) = declaration(proto, "proto")?;

    let params = element
        .children_named("param")
        .map(|param| {
            let (name, ty) = declaration(param, "param")?;
            Ok(Param {
                name,
                ty,
                len: owned_attr(param, "len"),
                group: owned_attr(param, "group"),
            })
        })
        .collect::<RegistryResult<_>>()?;

    let alias = element
        .child("alias")
        .map(|alias| required_attr(alias, "alias", "name").map(str::to_owned))
        .transpose()?;

    Ok(Command {
        name,
        ret,
        params,
        alias,
        aliases: Vec::new(),
    })
}

fn enum_value(element: &Element) -> RegistryResult<EnumValue> {
    Ok(EnumValue {
        name: required_attr(element, "enum", "name")?.to_owned(),
        value: required_attr(element, "enum", "value")?.to_owned(),
        ty: owned_attr(element, "type"),
        api: owned_attr(element, "api"),
        alias: owned_attr(element, "alias"),
        group: owned_attr(element, "group"),
    })
}

fn interface(element: &Element) -> RegistryResult<Interface> {
    let mut interface = Interface {
        api: owned_attr(element, "api"),
        profile: owned_attr(element, "profile"),
        ..Interface::default()
    };
    for item in element.elements() {
        match item.name.as_str() {
            "command" => interface
                .commands
                .push(required_attr(item, "command", "name")?.to_owned()),
            "enum" => interface
                .enums
                .push(required_attr(item, "enum", "name")?.to_owned()),
            _ => {}
        }
    }
    Ok(interface)
}

fn interfaces(element: &Element, tag: &str) -> RegistryResult<Vec<Interface>> {
    element.children_named(tag).map(interface).collect()
}

fn feature(element: &Element) -> RegistryResult<Feature> {
    Ok(Feature {
        api: required_attr(element, "feature", "api")?.to_owned(),
        name: required_attr(element, "feature", "name")?.to_owned(),
        number: required_attr(element, "feature", "number")?.parse()?,
        require: interfaces(element, "require")?,
        remove: interfaces(element, "remove")?,
    })
}

fn extension(element: &Element) -> RegistryResult<Extension> {
    Ok(Extension {
        name: required_attr(element, "extension", "name")?.to_owned(),
        supported: element
            .attr("supported")
            .map(|supported| supported.split('|').map(str::to_owned).collect())
            .unwrap_or_default(),
        require: interfaces(element, "require")?,
    })
}

impl Registry {
    /// Reads a `<registry>` root element.
    pub fn from_element(root: &Element) -> RegistryResult<Self> {
        if root.name != "registry" {
            return Err(RegistryError::NotARegistry);
        }

        let mut registry = Self::default();
        for section in root.elements() {
            match section.name.as_str() {
                "commands" => {
                    for element in section.children_named("command") {
                        let command = command(element)?;
                        registry.commands.insert(command.name.clone(), command);
                    }
                }
                "enums" => {
                    for element in section.children_named("enum") {
                        let value = enum_value(element)?;
                        registry
                            .enums
                            .entry(value.name.clone())
                            .or_default()
                            .push(value);
                    }
                }
                "feature" => registry.features.push(feature(section)?),
                "extensions" => {
                    for element in section.children_named("extension") {
                        registry.extensions.push(extension(element)?);
                    }
                }
                _ => {}
            }
        }
        registry.link_aliases();

        log::debug!(
            "registry: {} commands, {} enums, {} features, {} extensions",
            registry.commands.len(),
            registry.enums.len(),
            registry.features.len(),
            registry.extensions.len()
        );
        Ok(registry)
    }

    fn link_aliases(&mut self) {
        let links: Vec<(String, String)> = self
            .commands
            .values()
            .filter_map(|command| Some((command.alias.clone()?, command.name.clone())))
            .collect();
        for (target, alias) in links {
            match self.commands.get_mut(&target) {
                Some(command) => command.aliases.push(alias),
                None => log::warn!("{alias} is an alias of the undefined command {target}"),
            }
        }
    }

    pub fn extension(&self, name: &str) -> Option<&Extension> {
        self.extensions.iter().find(|extension| extension.name == name)
    }

    /// The definition of enum `name` that applies to `api`.
    pub fn enum_for(&self, name: &str, api: &str) -> Option<&EnumValue> {
        let candidates = self.enums.get(name)?;
        candidates
            .iter()
            .find(|value| value.api.as_deref() == Some(api))
            .or_else(|| candidates.iter().find(|value| value.api.is_none()))
    }
}
