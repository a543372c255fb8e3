//! Built-in deck: the e-commerce platform project presentation.

use crate::builder::DeckSpec;
use crate::palette::Swatch;
use crate::templates::{Captions, Metric, SlideSpec};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn rows(grid: &[&[&str]]) -> Vec<Vec<String>> {
    grid.iter().map(|row| lines(row)).collect()
}

fn title(title: &str, subtitle: &str) -> SlideSpec {
    SlideSpec::Title {
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
    }
}

fn section(number: u32, title: &str) -> SlideSpec {
    SlideSpec::Section {
        number,
        title: title.to_string(),
    }
}

fn content(title: &str, body: &[&str]) -> SlideSpec {
    SlideSpec::Content {
        title: title.to_string(),
        lines: lines(body),
        table: None,
    }
}

fn table(title: &str, grid: &[&[&str]], subtitle: &str) -> SlideSpec {
    SlideSpec::Table {
        title: title.to_string(),
        rows: rows(grid),
        subtitle: Some(subtitle.to_string()),
    }
}

/// The fifteen-slide project deck, in presentation order.
pub fn ecommerce_deck() -> DeckSpec {
    let slides = vec![
        title(
            "Plateforme E-Commerce Symfony",
            "Architecture Sécurisée & Haute Disponibilité",
        ),
        section(1, "Contexte / Problématique"),
        content(
            "Slide 1.1 : Contexte du Projet",
            &[
                "🎯 OBJECTIF PRINCIPAL",
                "Développer une plateforme e-commerce sécurisée, scalable et moderne",
                "",
                "📋 BESOINS IDENTIFIÉS",
                "• 🛒 Catalogue Produits : Gestion complète des produits et catégories",
                "• 👤 Gestion Utilisateurs : Inscription, connexion, rôles (Admin/Client)",
                "• 🔐 Sécurité Renforcée : Protection contre les cyberattaques",
                "• 💳 Commandes : Panier, checkout, historique",
                "• 📱 Accessibilité : Interface responsive (mobile/desktop)",
                "",
                "🏢 CONTEXTE TECHNIQUE",
                "• Stack : PHP 8.2 / Symfony 5.4 / MySQL 8.0",
                "• Infrastructure : Docker + Kubernetes",
                "• Environnement : Développement local → Production cloud",
            ],
        ),
        content(
            "Slide 1.2 : Problématiques Identifiées",
            &[
                "⚠️ DÉFIS MAJEURS",
                "",
                "🔐 SÉCURITÉ",
                "• Authentification faible (mots de passe simples)",
                "• Attaques par force brute",
                "• Données sensibles exposées",
                "",
                "📈 SCALABILITÉ & DISPONIBILITÉ",
                "• Charge variable (pics de trafic Black Friday)",
                "• Single point of failure",
                "• Temps d'arrêt lors des maintenances",
                "",
                "📊 STATISTIQUES DU MARCHÉ",
                "• 43% des cyberattaques ciblent les PME",
                "• 60% ferment dans les 6 mois après une attaque",
                "• 94% des utilisateurs abandonnent un site non sécurisé",
            ],
        ),
        section(2, "Solutions Possibles"),
        table(
            "Slide 2.1 : Analyse des Solutions de Sécurité",
            &[
                &["Solution", "Sécurité", "Complexité", "Coût", "Score"],
                &["Mot de passe simple", "⭐ (20%)", "Faible", "0€", "2/10"],
                &["MDP + Politique", "⭐⭐ (40%)", "Moyenne", "0€", "4/10"],
                &["2FA (TOTP) ✅", "⭐⭐⭐⭐⭐ (99.9%)", "Moyenne", "0€", "9/10"],
                &["Biométrique", "⭐⭐⭐⭐⭐ (99.9%)", "Haute", "€€€", "7/10"],
                &["SSO (OAuth2)", "⭐⭐⭐⭐ (95%)", "Haute", "€€", "6/10"],
            ],
            "Comparaison des méthodes d'authentification",
        ),
        table(
            "Slide 2.2 : Analyse des Solutions d'Infrastructure",
            &[
                &["Architecture", "Disponibilité", "Scalabilité", "Coût/mois", "Score"],
                &["Serveur unique", "95%", "Faible", "~20€", "3/10"],
                &["Docker + K8s ✅", "99.5%", "Haute", "~50€", "8/10"],
                &["Multi-cluster + LB", "99.99%", "Très haute", "~150€", "9/10"],
                &["Cloud managé (AWS)", "99.99%", "Auto", "~200€+", "9/10"],
            ],
            "Comparaison des architectures",
        ),
        section(3, "Déroulement / Réalisation"),
        table(
            "Slide 3.1 : Architecture Technique Implémentée",
            &[
                &["Couche", "Technologie", "Version"],
                &["Frontend", "Twig + Bootstrap", "5.x"],
                &["Backend", "Symfony", "5.4"],
                &["Langage", "PHP", "8.2"],
                &["Base de données", "MySQL", "8.0"],
                &["Conteneurisation", "Docker", "24.x"],
                &["Orchestration", "Kubernetes (Minikube)", "1.28"],
                &["2FA", "scheb/2fa-bundle + endroid/qr-code", "6.x"],
                &["SSL", "Let's Encrypt", "-"],
            ],
            "Stack technologique complète",
        ),
        content(
            "Slide 3.2 : Fonctionnalités Développées",
            &[
                "👥 GESTION DES UTILISATEURS",
                "Inscription → Validation → Connexion → 2FA QR Code → OTP → Accès",
                "",
                "🛒 PROCESSUS D'ACHAT",
                "• ✅ Parcourir le catalogue",
                "• ✅ Rechercher des produits",
                "• ✅ Ajouter au panier",
                "• ✅ Authentification 2FA",
                "• ✅ Valider la commande",
                "• ✅ Paiement",
                "",
                "👨‍💼 FONCTIONNALITÉS ADMIN",
                "• CRUD Produits • Gestion Catégories • Gestion Utilisateurs",
                "• Tableau de bord • Rapports de vente",
                "",
                "🔐 SÉCURITÉ : 2FA TOTP • HTTPS • Politique MDP • Firewall • Sauvegardes",
            ],
        ),
        section(4, "Bilan (Analyse des Résultats)"),
        SlideSpec::Metrics {
            title: "Slide 4.1 : Résultats Obtenus".to_string(),
            metrics: vec![
                Metric::new("99.7%", "Disponibilité", Swatch::Accent),
                Metric::new("0.8s", "Temps de réponse", Swatch::Primary),
                Metric::new("100%", "Couverture 2FA", Swatch::Accent),
                Metric::new("100%", "HTTPS", Swatch::Primary),
                Metric::new("669%", "ROI", Swatch::Warning),
                Metric::new("4 pods", "Scalabilité", Swatch::Accent),
            ],
        },
        SlideSpec::Comparison {
            title: "Slide 4.2 : Amélioration de la Sécurité".to_string(),
            before: lines(&[
                "Mot de passe simple",
                "HTTP non chiffré",
                "Serveur unique (95%)",
                "Backup manuel",
                "Risque: 15,000€/an",
            ]),
            after: lines(&[
                "2FA TOTP (+99.9%)",
                "HTTPS Let's Encrypt",
                "Multi-pod K8s (99.5%)",
                "Backup automatique",
                "Risque: 15€/an",
            ]),
        },
        SlideSpec::Conclusion {
            points: lines(&[
                "Sécurité 2FA : Protection maximale des comptes utilisateurs",
                "Architecture K8s : Haute disponibilité et scalabilité",
                "Automatisation : Scripts de déploiement et rebuild",
                "ROI de 669% : Investissement rentabilisé",
                "Standards respectés : OWASP, 12-Factor App",
            ]),
        },
        SlideSpec::Closing,
    ];

    DeckSpec {
        title: Some("Plateforme E-Commerce Symfony".to_string()),
        language: Some("fr-FR".to_string()),
        captions: Captions::default(),
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DeckBuilder;
    use crate::types::ShapeKind;

    #[test]
    fn test_documented_slide_order() {
        let kinds: Vec<_> = ecommerce_deck()
            .slides
            .iter()
            .map(SlideSpec::kind_name)
            .collect();

        assert_eq!(
            kinds,
            vec![
                "title",
                "section",
                "content",
                "content",
                "section",
                "table",
                "table",
                "section",
                "table",
                "content",
                "section",
                "metrics",
                "comparison",
                "conclusion",
                "closing",
            ]
        );
    }

    #[test]
    fn test_builtin_deck_slide_counts() {
        let canvas = DeckBuilder::new().build(&ecommerce_deck()).unwrap();
        assert_eq!(canvas.slide_count(), 15);

        let sections = canvas
            .slides()
            .iter()
            .filter(|s| {
                s.summarize()
                    .shapes
                    .iter()
                    .any(|sh| sh.texts.iter().any(|t| t.starts_with("SECTION ")))
            })
            .count();
        assert_eq!(sections, 4);
    }

    #[test]
    fn test_builtin_tables_are_rectangular() {
        let canvas = DeckBuilder::new().build(&ecommerce_deck()).unwrap();
        let tables: Vec<_> = canvas.slides().iter().flat_map(|s| s.tables()).collect();
        assert_eq!(tables.len(), 3);
        for table in tables {
            assert_eq!(
                table.cells().count(),
                table.row_count() * table.column_count()
            );
        }
    }

    #[test]
    fn test_metrics_slide_uses_three_columns() {
        let canvas = DeckBuilder::new().build(&ecommerce_deck()).unwrap();
        let metrics = canvas.slides()[11].summarize();
        let cards = metrics
            .shapes
            .iter()
            .filter(|s| s.kind == ShapeKind::RoundedRectangle)
            .count();
        assert_eq!(cards, 6);
    }
}
