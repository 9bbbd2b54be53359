//! Picking the commands and enums of one API version and profile.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::registry::{Command, EnumValue, Interface, Registry, Version};
use crate::{RegistryError, RegistryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Gl,
    Gles1,
    Gles2,
    Glsc2,
}

impl Api {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gl => "gl",
            Self::Gles1 => "gles1",
            Self::Gles2 => "gles2",
            Self::Glsc2 => "glsc2",
        }
    }
}

impl FromStr for Api {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "gl" => Self::Gl,
            "gles1" => Self::Gles1,
            "gles2" => Self::Gles2,
            "glsc2" => Self::Glsc2,
            _ => return Err(RegistryError::UnknownApi(s.to_owned())),
        })
    }
}

impl Display for Api {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Core,
    Compatibility,
}

impl Profile {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Compatibility => "compatibility",
        }
    }
}

impl FromStr for Profile {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "core" => Self::Core,
            "compatibility" | "compat" => Self::Compatibility,
            _ => return Err(RegistryError::UnknownProfile(s.to_owned())),
        })
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub api: Api,
    pub version: Version,
    pub profile: Profile,
    pub extensions: Vec<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            api: Api::Gl,
            version: Version::new(4, 6),
            profile: Profile::Core,
            extensions: Vec::new(),
        }
    }
}

/// The outcome of [`Selection::resolve`], sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected<'r> {
    pub commands: Vec<&'r Command>,
    pub enums: Vec<&'r EnumValue>,
    /// Extension names to fall back on, per selected command.
    pub aliases: BTreeMap<&'r str, Vec<&'r str>>,
}

impl Selected<'_> {
    pub fn aliases_of(&self, command: &str) -> &[&str] {
        match self.aliases.get(command) {
            Some(aliases) => aliases,
            None => &[],
        }
    }
}

#[derive(Default)]
struct Names<'r> {
    commands: BTreeSet<&'r str>,
    enums: BTreeSet<&'r str>,
}

impl<'r> Names<'r> {
    fn add(&mut self, interface: &'r Interface) {
        self.commands
            .extend(interface.commands.iter().map(String::as_str));
        self.enums.extend(interface.enums.iter().map(String::as_str));
    }

    fn remove(&mut self, interface: &Interface) {
        for command in &interface.commands {
            self.commands.remove(command.as_str());
        }
        for value in &interface.enums {
            self.enums.remove(value.as_str());
        }
    }
}

impl Selection {
    fn applies(&self, interface: &Interface) -> bool {
        let api = interface.api.as_deref().map_or(true, |api| api == self.api.name());
        let profile = interface
            .profile
            .as_deref()
            .map_or(true, |profile| profile == self.profile.name());
        api && profile
    }

    pub fn resolve<'r>(&self, registry: &'r Registry) -> RegistryResult<Selected<'r>> {
        let api = self.api.name();
        let mut names = Names::default();

        let mut features: Vec<_> = registry
            .features
            .iter()
            .filter(|feature| feature.api == api && feature.number <= self.version)
            .collect();
        features.sort_by_key(|feature| feature.number);
        for feature in features {
            for require in feature.require.iter().filter(|i| self.applies(i)) {
                names.add(require);
            }
            for remove in feature.remove.iter().filter(|i| self.applies(i)) {
                names.remove(remove);
            }
        }

        for name in &self.extensions {
            let extension = registry
                .extension(name)
                .ok_or_else(|| RegistryError::UnknownExtension(name.clone()))?;
            if !extension.supports(api) {
                log::warn!("{name} is not supported on {api}, skipping it");
                continue;
            }
            for require in extension.require.iter().filter(|i| self.applies(i)) {
                names.add(require);
            }
        }

        let commands = names
            .commands
            .iter()
            .map(|&name| {
                registry
                    .commands
                    .get(name)
                    .ok_or_else(|| RegistryError::UnknownCommand(name.to_owned()))
            })
            .collect::<RegistryResult<Vec<_>>>()?;

        let enums = names
            .enums
            .iter()
            .filter_map(|&name| {
                let value = registry.enum_for(name, api);
                if value.is_none() {
                    log::warn!("{name} has no value for {api}");
                }
                value
            })
            .collect();

        let aliases = self.alias_fallbacks(registry, &commands, &names.commands);
        log::info!(
            "selected {} commands and {} enums for {api} {} {}",
            commands.len(),
            names.enums.len(),
            self.version,
            self.profile
        );
        Ok(Selected {
            commands,
            enums,
            aliases,
        })
    }

    /// Aliases are only worth trying when an extension available on this API
    /// provides them.
    fn alias_fallbacks<'r>(
        &self,
        registry: &'r Registry,
        commands: &[&'r Command],
        selected: &BTreeSet<&str>,
    ) -> BTreeMap<&'r str, Vec<&'r str>> {
        let api = self.api.name();
        let provided: BTreeSet<&str> = registry
            .extensions
            .iter()
            .filter(|extension| extension.supports(api))
            .flat_map(|extension| &extension.require)
            .filter(|require| self.applies(require))
            .flat_map(|require| require.commands.iter().map(String::as_str))
            .collect();

        commands
            .iter()
            .filter_map(|&command| {
                let mut aliases: Vec<&str> = command
                    .aliases
                    .iter()
                    .map(String::as_str)
                    .filter(|alias| provided.contains(alias) && !selected.contains(alias))
                    .collect();
                aliases.sort_unstable();
                (!aliases.is_empty()).then_some((command.name.as_str(), aliases))
            })
            .collect()
    }
}
