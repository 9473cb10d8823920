//! Built-in sample proposals for offline demonstration and testing

use crate::proposal::ProposalRecord;

/// Return the built-in sample vendor proposals.
///
/// Used by the `sample` CLI mode and by tests that need populated records
/// without touching PDFs or the extraction service.
pub fn sample_proposals() -> Vec<ProposalRecord> {
    vec![
        ProposalRecord {
            id: 1,
            vendor_name: "Acme Corp".to_string(),
            project_name: "E-commerce Website Development".to_string(),
            price: 75000.0,
            delivery_timeline: "6 months with monthly milestones, final delivery by July 2024"
                .to_string(),
            scope_summary: "Full-stack e-commerce platform with React frontend, Node.js backend, \
                            payment processing, inventory management, and admin dashboard"
                .to_string(),
            risks: "Third-party payment gateway integration delays, potential scope creep with \
                    additional features, dependency on client's existing inventory system"
                .to_string(),
            source_file: "sample://acme_corp".to_string(),
            processed_at: "2024-01-15T10:00:00Z".to_string(),
        },
        ProposalRecord {
            id: 2,
            vendor_name: "TechSolutions Inc".to_string(),
            project_name: "Mobile App Development".to_string(),
            price: 45000.0,
            delivery_timeline:
                "4 months development cycle, iOS and Android versions delivered simultaneously"
                    .to_string(),
            scope_summary: "Native mobile application for iOS and Android, user authentication, \
                            real-time notifications, offline capability, and cloud synchronization"
                .to_string(),
            risks: "App store approval delays, device compatibility issues across different OS \
                    versions, performance optimization challenges for older devices"
                .to_string(),
            source_file: "sample://techsolutions_inc".to_string(),
            processed_at: "2024-01-16T14:30:00Z".to_string(),
        },
        ProposalRecord {
            id: 3,
            vendor_name: "DataWise Solutions".to_string(),
            project_name: "Business Intelligence Dashboard".to_string(),
            price: 120000.0,
            delivery_timeline:
                "8 months implementation with training, phased rollout starting month 6".to_string(),
            scope_summary: "Enterprise business intelligence platform with data visualization, \
                            automated reporting, predictive analytics, and integration with \
                            existing ERP systems"
                .to_string(),
            risks: "Data migration complexity, user adoption challenges, integration timeline \
                    dependent on ERP system availability, potential performance issues with \
                    large datasets"
                .to_string(),
            source_file: "sample://datawise_solutions".to_string(),
            processed_at: "2024-01-17T09:15:00Z".to_string(),
        },
        ProposalRecord {
            id: 4,
            vendor_name: "CloudFirst Technologies".to_string(),
            project_name: "Cloud Migration Services".to_string(),
            price: 95000.0,
            delivery_timeline:
                "5 months migration with 2 weeks testing buffer, go-live in month 6".to_string(),
            scope_summary: "Complete cloud infrastructure migration from on-premises to AWS, \
                            including database migration, application modernization, and \
                            security setup"
                .to_string(),
            risks: "Data migration downtime, application compatibility issues, security \
                    configuration challenges, potential cost overruns due to unexpected AWS usage"
                .to_string(),
            source_file: "sample://cloudfirst_technologies".to_string(),
            processed_at: "2024-01-18T11:45:00Z".to_string(),
        },
        ProposalRecord {
            id: 5,
            vendor_name: "AI Innovations Lab".to_string(),
            project_name: "Machine Learning Platform".to_string(),
            price: 150000.0,
            delivery_timeline: "10 months development with POC in month 3, beta in month 7, \
                                production in month 10"
                .to_string(),
            scope_summary: "Custom machine learning platform for predictive analytics, automated \
                            model training, real-time inference API, and comprehensive monitoring \
                            dashboard"
                .to_string(),
            risks: "Model accuracy requirements may not be met, data quality issues, integration \
                    complexity with existing systems, longer than expected training time for \
                    complex models"
                .to_string(),
            source_file: "sample://ai_innovations_lab".to_string(),
            processed_at: "2024-01-19T16:20:00Z".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_proposals_complete() {
        let proposals = sample_proposals();
        assert_eq!(proposals.len(), 5);
        for p in &proposals {
            assert!(p.is_complete(), "sample proposal {} incomplete", p.id);
            assert!(p.price > 0.0);
        }
    }

    #[test]
    fn test_sample_ids_sequential() {
        let proposals = sample_proposals();
        let ids: Vec<u64> = proposals.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
