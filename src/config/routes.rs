use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::{
    config::yml_settings::{RouteSettings, RoutesFile},
    error::{PathError, Result},
    path::{PathInstance, PathValue},
};

/// A named path and the optional text describing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub description: Option<String>,
    pub path: PathValue,
}

/// Named paths defined with one shared instance, kept in file order
#[derive(Debug, Clone)]
pub struct RouteTable {
    instance: PathInstance,
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new(instance: PathInstance, settings: Vec<RouteSettings>) -> Result<Self> {
        let mut routes = Vec::with_capacity(settings.len());
        let mut by_name = HashMap::with_capacity(settings.len());

        for RouteSettings {
            name,
            path,
            description,
        } in settings
        {
            if by_name.contains_key(&name) {
                return Err(PathError::DuplicateRoute(name));
            }

            let path = instance
                .parse(&path)
                .map_err(|e| PathError::Config(format!("Route '{}': {}", name, e)))?;
            debug!(route = %name, path = %path, "loaded route");

            by_name.insert(name.clone(), routes.len());
            routes.push(Route {
                name,
                description,
                path,
            });
        }

        Ok(Self {
            instance,
            routes,
            by_name,
        })
    }

    pub fn from_routes_file(file: RoutesFile) -> Result<Self> {
        let instance = file.instance();
        Self::new(instance, file.routes)
    }

    pub fn from_yaml_str(yml: &str) -> Result<Self> {
        Self::from_routes_file(RoutesFile::from_yaml_str(yml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_routes_file(RoutesFile::load(path)?)?;
        info!(file = %path.display(), routes = table.len(), "loaded route table");
        Ok(table)
    }

    pub fn instance(&self) -> &PathInstance {
        &self.instance
    }

    pub fn get(&self, name: &str) -> Option<&PathValue> {
        self.route(name).map(|route| &route.path)
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
