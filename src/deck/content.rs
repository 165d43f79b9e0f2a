//! The Launchpad investor deck, slide by slide.

use super::style::{
    self, CLOSING_TAGLINE_FRAME, CLOSING_TITLE, CLOSING_TITLE_FRAME, COVER_TAGLINE_FRAME,
    COVER_TITLE, COVER_TITLE_FRAME, TAGLINE,
};
use super::{Deck, SlideSpec, TextBlock};

/// Suggested file name for the generated deck.
pub const OUTPUT_FILE_NAME: &str = "Launchpad-Investor-Deck-v3.pptx";

pub const DECK_TITLE: &str = "Launchpad Investor Deck v3";

/// The 12-slide Launchpad investor deck.
pub fn launchpad_deck() -> Deck {
    Deck::new(
        DECK_TITLE,
        vec![
            cover(),
            SlideSpec::standard(
                "Problem",
                &[
                    "• 6+ months to plan a conference — venue hunting, speaker outreach, schedule drafting",
                    "• $50K–150K coordination costs for mid-size events",
                    "• 95% of event professionals expect increased AI adoption (Bizzabo 2026)",
                    "• Bottleneck: coordination, not ideas",
                ],
                None,
            ),
            SlideSpec::standard(
                "Solution",
                &[
                    "• 60 seconds: topic, city, date → full conference page",
                    "• 5-agent parallel generation: Speaker, Venue, Schedule, Pricing, Branding",
                    "• 6 AI bots promote events: Social Blitz, Community Infiltrator, Email Outreach, Partner Network, SEO & Content, Retargeting",
                    "• 34 pages, 11K+ lines, 11 APIs — production-ready",
                ],
                None,
            ),
            SlideSpec::standard(
                "Product",
                &[
                    "• Event creation wizard: topic, city, date, capacity, budget, vibe",
                    "• 6 demo events: AI Summit, Demo Conference, CyberNova, Startup Zaken, etc.",
                    "• Ticket checkout (Stripe), sponsor inquiry, affiliate program",
                    "• Accessibility: Dyslexia Mode, ADHD Focus, High Contrast, Reduced Motion",
                ],
                None,
            ),
            SlideSpec::standard(
                "Market Opportunity",
                &[
                    "• $2.1T global events industry by 2032 (Allied Market Research)",
                    "• 6.4% CAGR growth",
                    "• 54% of attendees prefer more in-person events post-pandemic (Eventgroove)",
                    "• 95% of event professionals expect AI adoption (Bizzabo 2026)",
                ],
                None,
            ),
            SlideSpec::standard(
                "Business Model",
                &[
                    "• Free: 1 event, AI generation, shareable page",
                    "• Pro ($29/mo): Unlimited events, custom branding, Supabase persistence",
                    "• Agency: $29/mo, unlimited client events",
                    "• Enterprise: Custom pricing, SSO, SLA, dedicated support",
                ],
                None,
            ),
            SlideSpec::standard(
                "Promotion Engine — 6 AI Street Bots",
                &[
                    "• Social Blitz — Twitter, LinkedIn, Instagram posts",
                    "• Community Infiltrator — Reddit, Discord, Slack",
                    "• Email Outreach — targeted organizer lists",
                    "• Partner Network — co-marketing, affiliates",
                    "• SEO & Content — blog, landing pages, backlinks",
                    "• Retargeting — ads, remarketing campaigns",
                ],
                None,
            ),
            SlideSpec::standard(
                "Capital Requirements",
                &[
                    "• $750K seed round",
                    "• 18-month runway",
                    "• Allocation: Engineering 40% | Growth 25% | AI Infra 20% | Ops 15%",
                    "• Use of funds: team, AI infra, go-to-market, operations",
                ],
                None,
            ),
            SlideSpec::standard(
                "MRR Projections",
                &[
                    "• Month 6: $5K MRR",
                    "• Month 12: $50K MRR",
                    "• Month 18: $150K MRR",
                    "• Month 24: $250K MRR",
                    "• Assumptions: 12% free-to-paid conversion, $29 Pro avg",
                ],
                None,
            ),
            SlideSpec::standard(
                "Milestones",
                &[
                    "• Q1 2026: 100 paying customers",
                    "• Q2 2026: Enterprise pilot (2–3 customers)",
                    "• Q3 2026: $50K MRR, Series A prep",
                    "• Q4 2026: API launch, integrations",
                ],
                None,
            ),
            SlideSpec::standard(
                "The Ask",
                &[
                    "• $750K seed to reach 18-month runway",
                    "• Build: 2 engineers, 1 growth, AI infra",
                    "• Target: $50K MRR by Month 12",
                    "• Contact: [your contact]",
                ],
                None,
            ),
            closing(),
        ],
    )
}

fn cover() -> SlideSpec {
    SlideSpec::new(
        style::BACKGROUND,
        vec![
            TextBlock::new(COVER_TITLE_FRAME, COVER_TITLE, &["Launchpad"]),
            TextBlock::new(
                COVER_TAGLINE_FRAME,
                TAGLINE,
                &["AI-Powered Event Operating System — 60-Second Conference Generation"],
            ),
        ],
    )
}

fn closing() -> SlideSpec {
    SlideSpec::new(
        style::BACKGROUND,
        vec![
            TextBlock::new(CLOSING_TITLE_FRAME, CLOSING_TITLE, &["Thank you"]),
            TextBlock::new(
                CLOSING_TAGLINE_FRAME,
                TAGLINE,
                &["Launchpad — AI Event Generation"],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_order() {
        let deck = launchpad_deck();
        assert_eq!(
            deck.slide_titles(),
            [
                "Launchpad",
                "Problem",
                "Solution",
                "Product",
                "Market Opportunity",
                "Business Model",
                "Promotion Engine — 6 AI Street Bots",
                "Capital Requirements",
                "MRR Projections",
                "Milestones",
                "The Ask",
                "Thank you",
            ]
        );
    }

    #[test]
    fn test_every_slide_is_dark() {
        let deck = launchpad_deck();
        assert!(deck.slides().iter().all(|s| s.background == style::BACKGROUND));
    }

    #[test]
    fn test_body_lines_are_bullets() {
        let deck = launchpad_deck();
        for slide in &deck.slides()[1..11] {
            assert_eq!(slide.blocks.len(), 2, "{:?}", slide.title());
            assert!(slide.blocks[1].lines.iter().all(|l| l.starts_with("• ")));
            assert!((4..=6).contains(&slide.blocks[1].lines.len()));
        }
    }

    #[test]
    fn test_cover_and_closing_styles() {
        let deck = launchpad_deck();
        let cover = &deck.slides()[0];
        assert_eq!(cover.blocks[0].style.size, 54.0);
        assert!(cover.blocks[0].style.bold);

        let closing = &deck.slides()[11];
        assert_eq!(closing.blocks[0].style.size, 48.0);
        assert!(!closing.blocks[0].style.bold);
        assert_eq!(closing.blocks[1].lines, ["Launchpad — AI Event Generation"]);
    }
}
