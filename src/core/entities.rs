// entity pass: required entities <-> implementation classes and tables
use tracing::trace;

use crate::core::classify::Reviewer;
use crate::core::findings::{AnalysisNote, DiscrepancyKind, FeatureDetail, ImplementedFeature, NoteKind, ReviewResult};
use crate::core::types::EntityImplKind;

impl Reviewer {
    //find the implementation unit for a required entity name.
    //classes are tried before tables, each in model order; first match wins.
    pub fn find_entity(&self, entity_name: &str) -> Option<(EntityImplKind, &str)> {
        let imp = &self.implementation;

        let class = imp
            .classes
            .iter()
            .find(|c| self.names.matches(&c.name, entity_name))
            .map(|c| (EntityImplKind::Class, c.name.as_str()));

        class.or_else(|| {
            imp.tables
                .iter()
                .find(|t| self.names.matches(&t.name, entity_name))
                .map(|t| (EntityImplKind::Table, t.name.as_str()))
        })
    }

    pub(crate) fn review_entities(&self) -> ReviewResult {
        let mut acc = ReviewResult::default();
        let required = &self.requirements.entities;

        for entity in required {
            match self.find_entity(&entity.name) {
                Some((kind, unit)) => {
                    trace!(entity = %entity.name, %kind, unit, "entity implemented");
                    acc.implemented_features.push(ImplementedFeature {
                        name: entity.name.clone(),
                        detail: FeatureDetail::Entity {
                            implementation_kind: kind,
                            implementation_name: unit.to_string(),
                        },
                    });
                }
                None => acc.push_discrepancy(
                    DiscrepancyKind::MissingEntity {
                        entity_name: entity.name.clone(),
                        description: entity.description.clone(),
                    },
                    self.config.requirement_name_len,
                ),
            }
        }

        //reverse direction: units the design never mentions
        let is_required = |unit: &str| required.iter().any(|e| self.names.matches(unit, &e.name));

        for c in self.implementation.classes.iter().filter(|c| !is_required(&c.name)) {
            acc.analysis_notes.push(AnalysisNote {
                kind: NoteKind::ExtraEntity,
                subject_name: c.name.clone(),
                extra_info: EntityImplKind::Class.to_string(),
                note: "Class exists in implementation but not in design document".to_string(),
            });
        }

        for t in self.implementation.tables.iter().filter(|t| !is_required(&t.name)) {
            acc.analysis_notes.push(AnalysisNote {
                kind: NoteKind::ExtraEntity,
                subject_name: t.name.clone(),
                extra_info: EntityImplKind::Table.to_string(),
                note: "Table exists in implementation but not in design document".to_string(),
            });
        }

        acc
    }
}
