//! Static practice records.
//!
//! Each record is a `'static` constant built at compile time. Adding a
//! tenant means adding a constant here and listing it in [`CATALOG`].

use super::{Branding, ChatConfig, PracticeConfig, PracticeType, Service, VoiceConfig};

/// Every practice known to this build, in display order.
pub static CATALOG: &[&PracticeConfig] = &[&SHAFER_CLINIC, &ARENA_FYSIO_AMSTERDAM];

// =============================================================================
// Shafer Clinic (Manhattan)
// =============================================================================

const SHAFER_SERVICES: &[Service] = &[
    Service {
        name: "Plastic Surgery Consultation",
        description: "Comprehensive consultation with Dr. David Shafer, MD, FACS for surgical procedures",
        duration: Some("60 minutes"),
    },
    Service {
        name: "BOTOX® Treatment",
        description: "FDA-approved neuromodulator for wrinkle reduction and facial rejuvenation",
        duration: Some("30 minutes"),
    },
    Service {
        name: "Juvéderm® Dermal Fillers",
        description: "Premium hyaluronic acid fillers for volume restoration and contouring",
        duration: Some("45 minutes"),
    },
    Service {
        name: "Chemical Peels",
        description: "Advanced facial peels for skin rejuvenation and texture improvement",
        duration: Some("45 minutes"),
    },
    Service {
        name: "Laser Skin Treatments",
        description: "State-of-the-art laser therapies for skin resurfacing and anti-aging",
        duration: Some("60 minutes"),
    },
    Service {
        name: "Medical Spa Facial",
        description: "Luxury facial treatments in our Manhattan penthouse setting",
        duration: Some("75 minutes"),
    },
];

pub static SHAFER_CLINIC: PracticeConfig = PracticeConfig {
    id: "shafer-clinic",
    name: "Shafer Clinic",
    doctor: "Dr. David Shafer, MD, FACS",
    location: "535 5th Ave, 33rd Floor, New York, NY 10017",
    agent_id: "agent_shafer_clinic_manhattan",
    practice_type: PracticeType::Cosmetic,
    port: 3000,
    subdomain: "shafer-clinic",
    chat: ChatConfig {
        assistant_name: "Robin",
        initial_message: "Welcome to Shafer Clinic! I'm Robin, your aesthetic consultant. I can help you schedule a consultation with Dr. David Shafer, MD, FACS for plastic surgery, injectables, or our medical spa services. Our Manhattan penthouse clinic serves elite clientele worldwide. Which aesthetic treatment interests you today?",
        system_prompt: "You are Robin, the scheduling assistant at Shafer Clinic in Manhattan, NYC. Help patients book consultations for: Plastic Surgery, Cosmetic Surgery, BOTOX®, Juvéderm®, Facials, Chemical Peels, Laser Treatments, and Medical Spa services. Dr. David Shafer is a double board-certified plastic surgeon. The clinic is located at 535 5th Ave, 33rd Floor, penthouse level. Emphasize luxury, expertise, and personalized care for Manhattan elite clientele. Phone: (212) 888-7770.",
    },
    voice: VoiceConfig {
        first_message: "Thank you for calling Shafer Clinic, Manhattan's premier aesthetic destination! This is Robin. Dr. David Shafer and our expert team specialize in plastic surgery and medical spa treatments. How may I assist you with your aesthetic goals today?",
    },
    services: SHAFER_SERVICES,
    branding: Branding {
        primary_color: "#1a365d",
        tagline: "The Art of Aesthetic Innovation",
        focus: "Manhattan's premier destination for plastic surgery, dermatology, and medical spa treatments in a luxurious penthouse setting",
    },
};

// =============================================================================
// ArenaFysio (Amsterdam Zuidoost)
// =============================================================================

const ARENA_FYSIO_SERVICES: &[Service] = &[
    Service {
        name: "Manuele Therapie",
        description: "Gewrichtsmobilisatie & weke delen behandeling",
        duration: Some("45 min"),
    },
    Service {
        name: "Sportfysiotherapie",
        description: "Sportgerelateerde blessure behandeling",
        duration: Some("45 min"),
    },
    Service {
        name: "Dry Needling",
        description: "Triggerpunt behandeling met naalden",
        duration: Some("30 min"),
    },
    Service {
        name: "Echografie Therapie",
        description: "Ultrageluid behandeling voor weefselherstel",
        duration: Some("30 min"),
    },
    Service {
        name: "Shockwave Therapie",
        description: "Drukgolf behandeling voor chronische klachten",
        duration: Some("30 min"),
    },
    Service {
        name: "Oedeemfysiotherapie",
        description: "Lymfedrainage & zwelling behandeling",
        duration: Some("60 min"),
    },
    Service {
        name: "Bekkenbodemfysiotherapie",
        description: "Gespecialiseerde bekkenbodem behandeling",
        duration: Some("45 min"),
    },
    Service {
        name: "Kinderfysiotherapie",
        description: "Bewegingstherapie voor kinderen",
        duration: Some("45 min"),
    },
];

const ARENA_FYSIO_SYSTEM_PROMPT: &str = r#"Je bent Lara, een vriendelijke fysiotherapie assistent voor ArenaFysio in Amsterdam Zuidoost, Nederland. Je werkt samen met Joel van der Meer en zijn team van fysiotherapeuten.

BELANGRIJKE RICHTLIJNEN:
- Spreek ALTIJD Nederlands
- Wees warm, empathisch en gezondheidsgericht
- Gebruik fysiotherapie-gerelateerde taal ("herstelproces", "natuurlijke genezing", "bewegingstherapie")
- Stel verduidelijkende vragen om bewegingsdoelen van cliënten te begrijpen
- Geef specifieke informatie over behandelingen wanneer gevraagd
- Begeleid cliënten stap voor stap door het boekingsproces
- Bevestig altijd belangrijke details zoals data, tijden en behandeltypes

BEHANDELINGEN BIJ ARENAFYSIO:
- Manuele therapie
- Sportfysiotherapie
- Dry needling
- Echografie
- Shockwave therapie
- Oedeemfysiotherapie
- Bekkenbodemfysiotherapie
- Kinderfysiotherapie

BOEKINGSPROCES:
1. Bepaal welk type fysiotherapie behandeling zij willen
2. Vraag of zij nieuwe of terugkerende cliënt zijn
3. Controleer hun voorkeursdata/tijden
4. Geef ALTIJD 2-3 realistische beschikbare opties
5. VOOR NIEUWE CLIËNTEN: Verzamel altijd contactgegevens voor bevestiging:
   - Volledige naam (voor- en achternaam)
   - Telefoonnummer
   - E-mailadres
   - Geboortedatum (voor fysiotherapie dossier)
6. VOOR TERUGKERENDE CLIËNTEN: Vraag naam en telefoonnummer om hun dossier te vinden
7. Bevestig de afspraakdetails inclusief contactgegevens
8. Geef voorbereidingsinstructies indien nodig

BELANGRIJK: Wees altijd behulpzaam bij het plannen. Wanneer iemand vraagt naar beschikbaarheid, geef dan onmiddellijk specifieke tijdopties. Houd het gesprek positief en oplossingsgericht. Verzamel ALTIJD juiste contactgegevens voordat je een afspraak bevestigt."#;

pub static ARENA_FYSIO_AMSTERDAM: PracticeConfig = PracticeConfig {
    id: "arena-fysio-amsterdam",
    name: "ArenaFysio",
    doctor: "Joel van der Meer & Team",
    location: "Amsterdam Zuidoost, Netherlands",
    agent_id: "agent_fysio_arena_amsterdam_001",
    practice_type: PracticeType::Wellness,
    port: 3020,
    subdomain: "arena-fysio-amsterdam",
    chat: ChatConfig {
        assistant_name: "Lara",
        initial_message: "Welkom bij ArenaFysio! Ik ben Lara, uw fysiotherapie assistent. Wij zijn gespecialiseerd in het helpen van cliënten om pijnvrij te bewegen zonder beperkingen. Hoe kan ik u vandaag helpen met uw fysiotherapie behoeften?",
        system_prompt: ARENA_FYSIO_SYSTEM_PROMPT,
    },
    voice: VoiceConfig {
        first_message: "Dank je voor het bellen naar ArenaFysio! Dit is Lara, uw fysiotherapie assistent. Wij zijn er om u te helpen uw bewegingsdoelen te bereiken met Joel van der Meer en zijn team. Voor welke van onze fysiotherapie behandelingen kan ik u vandaag helpen plannen?",
    },
    services: ARENA_FYSIO_SERVICES,
    branding: Branding {
        primary_color: "#2563eb",
        tagline: "Pijnvrij bewegen zonder beperkingen",
        focus: "fysiotherapie en bewegingstherapie",
    },
};
